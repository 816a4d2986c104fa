//! End-to-end tests of the command line tools
#![cfg(all(feature = "pattern", feature = "plot"))]

use std::path::Path;
use std::process::Command;

use echotools::grid::{read_grid_file, write_grid_file, Elements, Grid, Layout};
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("run")).unwrap();
    std::fs::create_dir(dir.path().join("maps")).unwrap();

    let classified = Grid::new(2, 3, Elements::I8(vec![0, 1, 2, 2, 1, 0])).unwrap();
    write_grid_file(&classified, dir.path().join("maps/shadowing.bin"), Layout::Legacy).unwrap();

    let angles = Grid::new(2, 2, Elements::F32(vec![0.5, -0.25, 1.0, 0.0])).unwrap();
    write_grid_file(&angles, dir.path().join("maps/grazing.bin"), Layout::Legacy).unwrap();
    dir
}

fn tool(name: &str, cwd: &Path) -> Command {
    let binary = match name {
        "tocsv" => env!("CARGO_BIN_EXE_tocsv"),
        "contourplot" => env!("CARGO_BIN_EXE_contourplot"),
        "antenna_csv_to_binary" => env!("CARGO_BIN_EXE_antenna_csv_to_binary"),
        _ => unreachable!(),
    };
    let mut command = Command::new(binary);
    command.current_dir(cwd);
    command
}

#[rstest]
#[case("maps/shadowing.bin", "0,1,2\r\n2,1,0\r\n")]
#[case("maps/grazing.bin", "0.5,-0.25\r\n1,0\r\n")]
fn tocsv_reads_from_parent(workspace: tempfile::TempDir, #[case] path: &str, #[case] text: &str) {
    let output = tool("tocsv", &workspace.path().join("run"))
        .arg(path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), text);
}

#[rstest]
fn tocsv_rejects_malformed(workspace: tempfile::TempDir) {
    // 2x2 grid with only 3 payload bytes
    let bytes = [0u8, 2, 0, 0, 0, 2, 0, 0, 0, 1, 2, 3];
    std::fs::write(workspace.path().join("maps/bad.bin"), bytes).unwrap();

    let output = tool("tocsv", &workspace.path().join("run"))
        .arg("maps/bad.bin")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[rstest]
fn contourplot_writes_image(workspace: tempfile::TempDir) {
    let run = workspace.path().join("run");
    let status = tool("contourplot", &run)
        .args(["maps/grazing.bin", "--size", "80x60", "-o", "grazing.svg"])
        .status()
        .unwrap();

    assert!(status.success());
    let svg = std::fs::read_to_string(run.join("grazing.svg")).unwrap();
    assert!(svg.contains("<rect"));
}

#[rstest]
fn contourplot_base_dir(workspace: tempfile::TempDir) {
    let status = tool("contourplot", workspace.path())
        .args(["shadowing.bin", "--base-dir", "maps", "--size", "60x40"])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(workspace.path().join("shadowing.png").exists());
}

#[rstest]
fn csv_to_binary_round_trip(workspace: tempfile::TempDir) {
    let run = workspace.path().join("run");
    std::fs::write(run.join("pattern.csv"), "-0.5,0.25\n0.0,1.0\n0.5,0.25\n").unwrap();

    let status = tool("antenna_csv_to_binary", &run)
        .args(["pattern.csv", "pattern.bin"])
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(run.join("pattern.bin")).unwrap();
    assert_eq!(bytes[..5], [0u8, 3, 0, 0, 0]);
    assert_eq!(bytes.len(), 5 + 3 * 8);

    // read as a grid, the first angle lands in the height field
    assert!(read_grid_file(run.join("pattern.bin")).is_err());
}

#[rstest]
fn csv_to_binary_fails_on_bad_field(workspace: tempfile::TempDir) {
    let run = workspace.path().join("run");
    std::fs::write(run.join("bad.csv"), "0.1,0.2\nabc,0.3\n").unwrap();

    let output = tool("antenna_csv_to_binary", &run)
        .args(["bad.csv", "bad.bin"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
