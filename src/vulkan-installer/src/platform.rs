use crate::utils::{print_status, TagColor};
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Os {
    Windows,
    Linux,
    Macos,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Aarch64,
    Other(String),
}

#[derive(Debug, Clone)]
pub struct PlatformInfo {
    pub os: Os,
    pub arch: Arch,
    pub full_os: String,
}

impl PlatformInfo {
    /// Detects the platform from compile-time target constants only; nothing on the host is read.
    pub fn build() -> Self {
        Self::from_parts(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Builds a `PlatformInfo` from raw `std::env::consts` style identifiers.
    pub fn from_parts(raw_os: &str, raw_arch: &str) -> Self {
        let os = match raw_os {
            "windows" => Os::Windows,
            "linux" => Os::Linux,
            "macos" => Os::Macos,
            other => Os::Other(other.to_string()),
        };

        let arch = match raw_arch {
            "x86_64" => Arch::X86_64,
            "aarch64" => Arch::Aarch64,
            other => Arch::Other(other.to_string()),
        };

        PlatformInfo {
            os,
            arch,
            full_os: raw_os.to_string(),
        }
    }

    /// The LunarG installer only exists for Windows.
    pub fn is_supported(&self) -> bool {
        self.os == Os::Windows
    }

    pub fn print_summary(&self) {
        let full_os = System::long_os_version().unwrap_or_else(|| self.full_os.clone());
        print_status("INFO", "Operating System", &full_os, TagColor::Cyan);
        print_status(
            "INFO",
            "Architecture",
            &format!("{:?}", self.arch),
            TagColor::Cyan,
        );
        let sys = System::new_with_specifics(
            RefreshKind::new()
                .with_memory(MemoryRefreshKind::everything())
                .with_cpu(CpuRefreshKind::everything()),
        );

        let total_mem_gib = sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0;

        let cores = sys.cpus().len();
        print_status("INFO", "CPU Cores", &format!("{}", cores), TagColor::Cyan);

        print_status(
            "INFO",
            "Total Ram",
            &format!("{:.2} GiB", total_mem_gib),
            TagColor::Cyan,
        );
    }
}
