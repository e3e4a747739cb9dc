//! Library-level tests for the bootstrap resolver pipeline:
//! detection → strategy selection → installer loop.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use groundwork::installer::{InstallOutcome, Installer, InstallerContext, PackageRequest};
use groundwork::manifest::{core_requests, Manifest};
use groundwork::platform::{detect, HostProbes, Kernel, PlatformProfile};
use groundwork::strategy::Strategy;
use groundwork::ui::MockUI;
use groundwork::GroundworkError;

/// Fake host for end-to-end resolver runs.
#[derive(Default)]
struct FakeHost {
    env: HashMap<String, String>,
    files: HashMap<PathBuf, String>,
    kernel: Option<Kernel>,
}

impl FakeHost {
    fn debian() -> Self {
        let mut host = Self {
            kernel: Some(Kernel::Linux),
            ..Default::default()
        };
        host.files.insert(
            PathBuf::from("/etc/os-release"),
            "ID=ubuntu\nID_LIKE=debian\n".to_string(),
        );
        host
    }
}

impl HostProbes for FakeHost {
    fn env_var(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }

    fn dir_exists(&self, _path: &Path) -> bool {
        false
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        self.files.get(path).cloned()
    }

    fn kernel(&self) -> Kernel {
        self.kernel.unwrap_or(Kernel::Other)
    }
}

#[test]
fn debian_host_resolves_end_to_end() {
    let profile = detect(&FakeHost::debian());
    assert_eq!(profile, PlatformProfile::DebianLinux);

    let strategy = Strategy::select_with(profile, &|_| true, true).unwrap();

    // python3-pip fails, python-pip succeeds: the documented fallback case
    let commands = RefCell::new(Vec::new());
    let runner = |cmd: &str| {
        commands.borrow_mut().push(cmd.to_string());
        !cmd.contains("python3-pip")
    };
    let lookup = |name: &str| name == "git";
    let ctx = InstallerContext {
        lookup: &lookup,
        runner: &runner,
    };

    let mut ui = MockUI::new();
    let mut installer = Installer::new(&strategy, &ctx);
    let reports = installer
        .install_all(&core_requests(profile), &mut ui)
        .unwrap();

    let by_name: HashMap<_, _> = reports
        .iter()
        .map(|r| (r.package.as_str(), &r.outcome))
        .collect();
    assert_eq!(by_name["git"], &InstallOutcome::AlreadyPresent);
    assert_eq!(by_name["python3"], &InstallOutcome::Installed);
    assert_eq!(by_name["python3-pip"], &InstallOutcome::Installed);

    let commands = commands.borrow();
    assert!(commands.contains(&"apt install -y python3-pip".to_string()));
    assert!(commands.contains(&"apt install -y python-pip".to_string()));
    // git was already present, so it never reached the manager
    assert!(!commands.iter().any(|c| c.contains("install -y git")));
}

#[test]
fn unknown_host_never_reaches_a_package_manager() {
    let profile = detect(&FakeHost::default());
    assert_eq!(profile, PlatformProfile::Unknown);

    let err = Strategy::select_with(profile, &|_| true, false).unwrap_err();
    assert!(matches!(err, GroundworkError::UnsupportedPlatform { .. }));
    assert!(core_requests(profile).is_empty());
}

#[test]
fn second_run_is_idempotent() {
    let profile = detect(&FakeHost::debian());
    let strategy = Strategy::select_with(profile, &|_| true, true).unwrap();

    // First run: nothing installed yet, everything gets installed
    let installed = RefCell::new(Vec::<String>::new());
    let first_runner = |cmd: &str| {
        if let Some(pkg) = cmd.strip_prefix("apt install -y ") {
            installed.borrow_mut().push(pkg.to_string());
        }
        true
    };
    let first_lookup = |_: &str| false;
    let ctx = InstallerContext {
        lookup: &first_lookup,
        runner: &first_runner,
    };
    let mut ui = MockUI::new();
    let mut installer = Installer::new(&strategy, &ctx);
    installer
        .install_all(&core_requests(profile), &mut ui)
        .unwrap();
    assert!(!installed.borrow().is_empty());

    // Second run: executables now present, zero manager invocations
    let second_runner = |_: &str| panic!("no manager command may run on a converged host");
    let second_lookup = |_: &str| true;
    let ctx = InstallerContext {
        lookup: &second_lookup,
        runner: &second_runner,
    };
    let mut ui = MockUI::new();
    let mut installer = Installer::new(&strategy, &ctx);
    let reports = installer
        .install_all(&core_requests(profile), &mut ui)
        .unwrap();

    assert!(reports
        .iter()
        .all(|r| r.outcome == InstallOutcome::AlreadyPresent));
}

#[test]
fn manifest_packages_follow_core_list() {
    let temp = tempfile::TempDir::new().unwrap();
    let manifest_path = temp.path().join("packages.json");
    std::fs::write(
        &manifest_path,
        r#"{"packages": [{"name": "nmap"}, {"name": "hydra", "optional": true}]}"#,
    )
    .unwrap();

    let profile = detect(&FakeHost::debian());
    let mut requests = core_requests(profile);
    requests.extend(Manifest::load(&manifest_path).unwrap().requests());

    assert_eq!(requests.first().unwrap().name, "git");
    let tail: Vec<_> = requests.iter().rev().take(2).map(|r| r.name.as_str()).collect();
    assert_eq!(tail, vec!["hydra", "nmap"]);

    // Optional manifest package failing does not abort the run
    let strategy = Strategy::select_with(profile, &|_| true, true).unwrap();
    let runner = |cmd: &str| !cmd.contains("hydra");
    let lookup = |_: &str| false;
    let ctx = InstallerContext {
        lookup: &lookup,
        runner: &runner,
    };
    let mut ui = MockUI::new();
    let mut installer = Installer::new(&strategy, &ctx);
    let reports = installer.install_all(&requests, &mut ui).unwrap();

    let hydra = reports.iter().find(|r| r.package == "hydra").unwrap();
    assert!(matches!(hydra.outcome, InstallOutcome::Failed { .. }));
    assert!(ui.has_warning("hydra"));
}

#[test]
fn required_manifest_package_failure_is_fatal() {
    let profile = detect(&FakeHost::debian());
    let strategy = Strategy::select_with(profile, &|_| true, true).unwrap();

    let requests = vec![PackageRequest::required("definitely-missing")];
    let runner = |_: &str| false;
    let lookup = |_: &str| false;
    let ctx = InstallerContext {
        lookup: &lookup,
        runner: &runner,
    };
    let mut ui = MockUI::new();
    let mut installer = Installer::new(&strategy, &ctx);

    let err = installer.install_all(&requests, &mut ui).unwrap_err();
    assert!(matches!(
        err,
        GroundworkError::PackageInstallFailed { ref package, .. } if package == "definitely-missing"
    ));
}
