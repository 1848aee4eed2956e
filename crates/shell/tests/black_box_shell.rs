//! End-to-end sessions: library-level and through the `stockroom` binary.

use std::io::Write;
use std::process::{Command, Stdio};

use stockroom_catalog::Catalog;
use stockroom_core::ItemId;
use stockroom_shell::{Session, SessionEnd};

const WAREHOUSE_SCRIPT: &str = "\
add laptop electronics 45000 50
add smartphone electronics 25000 100
add tablet electronics 30000 75
update 2 150
display
total
exit
";

#[test]
fn warehouse_session_through_library() {
    let mut catalog = Catalog::new();
    let mut out = Vec::new();

    let end = Session::new(&mut catalog, "₹")
        .run(WAREHOUSE_SCRIPT.as_bytes(), &mut out)
        .unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\
Item added with ID: 1
Item added with ID: 2
Item added with ID: 3
Updated smartphone (ID 2): 100 -> 150
ID\tName\tCategory\tUnit cost\tQuantity
1\tlaptop\telectronics\t45000\t50
2\tsmartphone\telectronics\t25000\t150
3\ttablet\telectronics\t30000\t75
---------------------------------------------------------
Total catalog value: ₹ 8250000
Exiting.
"
    );

    // The caller still owns the catalog afterwards.
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(ItemId::new(2)).map(|i| i.quantity()), Some(150));
}

#[test]
fn empty_session_through_library() {
    let mut catalog = Catalog::new();
    let mut out = Vec::new();

    Session::new(&mut catalog, "₹")
        .run("list\ntotal\nupdate 1 10\n".as_bytes(), &mut out)
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Catalog is empty.\nTotal catalog value: ₹ 0\nItem with ID 1 not found.\n"
    );
}

#[test]
fn json_listing_through_library() {
    let mut catalog = Catalog::new();
    let mut out = Vec::new();

    Session::new(&mut catalog, "₹")
        .run("1 pen office 150 40\nlist --json\n".as_bytes(), &mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let json_line = text.lines().nth(1).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(json_line).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            {"id": 1, "name": "pen", "category": "office", "unit_cost": 150, "quantity": 40}
        ])
    );
}

#[test]
fn warehouse_session_through_binary() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stockroom"))
        .args(["--currency", "INR"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn stockroom");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(WAREHOUSE_SCRIPT.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Updated smartphone (ID 2): 100 -> 150"));
    assert!(stdout.contains("Total catalog value: INR 8250000"));
    assert!(stdout.ends_with("Exiting.\n"));
}

#[test]
fn binary_survives_malformed_input_and_eof() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stockroom"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn stockroom");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"add laptop electronics lots 5\nbogus\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let errors = stdout.lines().filter(|l| l.starts_with("error: ")).count();
    assert_eq!(errors, 2);
}

#[test]
fn binary_keeps_going_after_non_utf8_line() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stockroom"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn stockroom");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"add caf\xe9 x 2 2\nadd c d 3 3\nexit\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "error: input is not valid UTF-8\nItem added with ID: 1\nExiting.\n"
    );
}
