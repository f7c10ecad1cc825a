use std::fs;
use std::process::Command;
use tempfile::TempDir;

const CAPTURE: &str = "\
Protocol  Address          Age (min)  Hardware Addr   Type   Interface
192.168.1.1            0    aabb.ccdd.eeff  ARPA   GigabitEthernet0/1
192.168.1.2            5    INCOMPLETE       ARPA   GigabitEthernet0/2
192.168.1.3           10    1122.3344.5566  ARPA   GigabitEthernet0/3
10.0.0.1              15    INCOMPLETE       ARPA   GigabitEthernet0/4
";

fn arp_inspect(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_arp-inspect"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_full_workflow() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("test_arp.txt"), CAPTURE).unwrap();

    let output = arp_inspect(&dir).arg("test_arp.txt").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("There are 2 incomplete MAC Addresses"));
    assert!(stdout.contains("Incomplete-MAC-Addresses.txt"));

    let report = fs::read_to_string(dir.path().join("Incomplete-MAC-Addresses.txt")).unwrap();
    assert_eq!(report.lines().count(), 2);
    assert!(report.contains("192.168.1.2"));
    assert!(report.contains("10.0.0.1"));
}

#[test]
fn test_workflow_no_results() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("test_arp.txt"),
        "192.168.1.1   0   aabb.ccdd.eeff   ARPA   GigabitEthernet0/1\n",
    )
    .unwrap();

    let output = arp_inspect(&dir)
        .args(["--no-banner", "test_arp.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No incomplete MAC addresses found"));
    assert!(!stdout.contains("searches a text file"));

    let report = fs::read_to_string(dir.path().join("Incomplete-MAC-Addresses.txt")).unwrap();
    assert_eq!(report, "");
}

#[test]
fn test_json_output_option() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("arp.txt"), CAPTURE).unwrap();

    let output = arp_inspect(&dir)
        .args(["arp.txt", "--format", "json", "--output", "report.json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report = fs::read_to_string(dir.path().join("report.json")).unwrap();
    assert!(report.contains("\"count\": 2"));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();

    let output = arp_inspect(&dir).arg("missing.txt").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("not found"));
}

#[test]
fn test_interactive_selection() {
    use std::io::Write;
    use std::process::Stdio;

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("test_arp.txt"), CAPTURE).unwrap();

    let mut child = arp_inspect(&dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"test_arp.txt\n\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Files in current directory: test_arp.txt"));
    assert!(stdout.contains("There are 2 incomplete MAC Addresses"));
    assert!(stdout.contains("Press enter to exit"));
}

#[test]
fn test_banner_names_custom_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("arp.txt"), CAPTURE).unwrap();

    let output = arp_inspect(&dir)
        .args(["arp.txt", "-o", "core-sw1.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Results file: \"core-sw1.txt\""));
    assert!(!stdout.contains("Incomplete-MAC-Addresses.txt"));
    assert!(dir.path().join("core-sw1.txt").exists());
}
