use clap::Parser;
use vulkan_sdk_installer::ci::GithubActions;
use vulkan_sdk_installer::config::ConfigLoader;
use vulkan_sdk_installer::installer::{report_outcome, Installer};
use vulkan_sdk_installer::logging::setup_logging;
use vulkan_sdk_installer::platform::PlatformInfo;
use vulkan_sdk_installer::types::{InstallOutcome, InstallVulkanSdkCli};
use vulkan_sdk_installer::utils::print_banner;
use vulkan_sdk_installer::{error_message, warning_message};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = InstallVulkanSdkCli::parse();

    // must stay ahead of config, logging and any probing of the host
    let platform = PlatformInfo::build();
    if !platform.is_supported() {
        let outcome = InstallOutcome::UnsupportedPlatform {
            os: platform.full_os.clone(),
        };
        let _ = report_outcome(&outcome, None, &mut std::io::stdout());
        std::process::exit(outcome.exit_code());
    }

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            error_message!("Failed to load configuration: {e:#}");
            std::process::exit(1);
        }
    };

    if let Err(e) = setup_logging(&config.log_level) {
        warning_message!("Logging disabled: {e:#}");
    }

    print_banner();
    platform.print_summary();

    let mut installer = match Installer::from_config(platform, &config) {
        Ok(installer) => installer,
        Err(e) => {
            error_message!("Failed to set up installer: {e:#}");
            std::process::exit(1);
        }
    };
    if args.clean_on_failure {
        installer.keep_temp_on_failure = false;
    }

    let outcome = match installer.run().await {
        Ok(outcome) => outcome,
        Err(err) => {
            error_message!("Error Running Installer: {err:#}");
            std::process::exit(1);
        }
    };

    let github = args.gh_actions.then(GithubActions::from_env);
    if let Err(err) = report_outcome(&outcome, github.as_ref(), &mut std::io::stdout()) {
        error_message!("Failed to export SDK location: {err:#}");
        std::process::exit(1);
    }

    std::process::exit(outcome.exit_code());
}
