//! Build-system descriptors of the engine SDK modules.

use eyre::eyre;
use std::collections::BTreeMap;

/// Print the documentation classes a module exposes to the engine build.
#[derive(argh::FromArgs)]
#[argh(subcommand, name = "module-config")]
pub struct Args {
    /// module to describe
    #[argh(positional, default = "String::from(\"blazium_sdk\")")]
    pub module: String,

    /// also report whether the module builds for this platform
    #[argh(option)]
    pub platform: Option<String>,
}

/// Variables of the build environment handed to a module's hooks.
pub type BuildEnv = BTreeMap<String, String>;

#[derive(Debug)]
pub struct ModuleDescriptor {
    pub name: &'static str,
    doc_classes: &'static [&'static str],
    doc_path: &'static str,
}

impl ModuleDescriptor {
    pub fn can_build(&self, _env: &BuildEnv, _platform: &str) -> bool {
        true
    }

    pub fn configure(&self, _env: &mut BuildEnv) {}

    pub fn doc_classes(&self) -> &'static [&'static str] {
        self.doc_classes
    }

    pub fn doc_path(&self) -> &'static str {
        self.doc_path
    }
}

pub const BLAZIUM_SDK: ModuleDescriptor = ModuleDescriptor {
    name: "blazium_sdk",
    doc_classes: &[
        "CSV",
        "ResourceImporterCSV",
        "JWT",
        "ENV",
        "LobbyClient",
        "BlaziumClient",
        "LobbyInfo",
        "LobbyPeer",
        "LobbyResponse",
        "LobbyResult",
        "ViewLobbyResponse",
        "ViewLobbyResult",
        "ScriptedLobbyClient",
        "ScriptedLobbyResponse",
        "ScriptedLobbyResult",
        "POGRClient",
        "POGRResult",
        "POGRResponse",
        "MasterServerClient",
        "MasterServerResult",
        "MasterServerResponse",
        "MasterServerListResult",
        "MasterServerListResponse",
        "GameServerInfo",
        "LoginClient",
        "LoginURLResponse",
        "LoginURLResult",
        "LoginConnectResponse",
        "LoginConnectResult",
        "LoginVerifyTokenResponse",
        "LoginVerifyTokenResult",
        "LoginIDResponse",
        "LoginIDResult",
        "LoginAuthResponse",
        "LoginAuthResult",
        "ThirdPartyClient",
        "DiscordEmbeddedAppClient",
        "DiscordEmbeddedAppResponse",
        "DiscordEmbeddedAppResult",
        "YoutubePlayablesClient",
        "YoutubePlayablesResponse",
        "YoutubePlayablesResult",
    ],
    doc_path: "doc_classes",
};

pub const MODULES: &[ModuleDescriptor] = &[BLAZIUM_SDK];

pub fn find_module(name: &str) -> Option<&'static ModuleDescriptor> {
    MODULES.iter().find(|module| module.name == name)
}

pub fn main(args: Args) -> eyre::Result<()> {
    let module = find_module(&args.module)
        .ok_or_else(|| eyre!("unknown module '{}'", args.module))?;
    let mut env = BuildEnv::new();
    module.configure(&mut env);

    if let Some(platform) = &args.platform {
        println!("can_build {}: {}", platform, module.can_build(&env, platform));
    }
    println!("doc_path: {}", module.doc_path());
    for class in module.doc_classes() {
        println!("{}", class);
    }
    Ok(())
}
