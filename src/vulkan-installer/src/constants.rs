pub const VERSION_MARKER_URL: &str = "https://vulkan.lunarg.com/sdk/latest/windows.txt";
pub const SDK_DOWNLOAD_BASE_URL: &str = "https://sdk.lunarg.com/sdk/download";

/// File name the downloaded installer is written to inside the temporary directory.
pub const INSTALLER_FILE_NAME: &str = "vulkan-installer.exe";
/// NSIS-style unattended install switch understood by the LunarG installer.
pub const SILENT_INSTALL_FLAG: &str = "/S";

pub const SDK_ENV_VAR: &str = "VULKAN_SDK";
pub const SDK_INSTALL_ROOT: &str = r"C:\VulkanSDK";

pub const CONFIG_ENV_PREFIX: &str = "VULKAN_INSTALLER";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
