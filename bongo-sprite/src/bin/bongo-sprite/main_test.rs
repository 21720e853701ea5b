use super::*;

use tempfile::tempdir;

#[test]
fn diff_cmd() -> anyhow::Result<()> {
    let tmp_dir = tempdir()?;
    let root = tmp_dir.path();
    fs::write(root.join("base.txt"), "; base\n##\n..\n")?;
    fs::write(root.join("tap-1.txt"), "#.\n.#\n")?;

    let out = diff_tables(&DiffArgs {
        name: "CAT".into(),
        base: root.join("base.txt"),
        poses: vec![root.join("tap-1.txt")],
    })?;

    assert_eq!(
        out,
        "pub const CAT_BASE: &[u16] = &[
    2,
    0x8000, 0x8001,
];

pub const CAT_TAP_1: &[u16] = &[
    2,
    0x0001, 0x8003,
];
"
    );
    Ok(())
}

#[test]
fn diff_cmd_size_mismatch() -> anyhow::Result<()> {
    let tmp_dir = tempdir()?;
    let root = tmp_dir.path();
    fs::write(root.join("base.txt"), "##\n..\n")?;
    fs::write(root.join("pose.txt"), "#..\n")?;

    let err = diff_tables(&DiffArgs {
        name: "CAT".into(),
        base: root.join("base.txt"),
        poses: vec![root.join("pose.txt")],
    })
    .unwrap_err();

    assert!(err.to_string().ends_with("Pose is 3x1 but the base sprite is 2x2"));
    Ok(())
}

#[test]
fn validate_cmd() -> anyhow::Result<()> {
    let tmp_dir = tempdir()?;
    let file = tmp_dir.path().join("frame.rs");
    fs::write(&file, "const F: &[u16] = &[2, 0x8001, 0x0fff];\n")?;

    validate(&ValidateArgs {
        verbose: true,
        width: OLED_WIDTH,
        height: OLED_HEIGHT,
        file: file.clone(),
    })?;

    assert!(validate(&ValidateArgs {
        verbose: false,
        width: 32,
        height: 32,
        file,
    })
    .is_err());
    Ok(())
}

#[test]
fn preview_cmd() -> anyhow::Result<()> {
    let tmp_dir = tempdir()?;
    let root = tmp_dir.path();
    fs::write(root.join("base.txt"), "2, 0x8000, 0x8001")?;
    fs::write(root.join("diff.txt"), "2, 0x0001, 0x8003")?;

    let args = PreviewArgs {
        width: 2,
        height: 2,
        base: root.join("base.txt"),
        diff: None,
    };
    assert_eq!(preview(&args)?, "##\n..\n");

    let args = PreviewArgs {
        diff: Some(root.join("diff.txt")),
        ..args
    };
    assert_eq!(preview(&args)?, "#.\n.#\n");
    Ok(())
}

#[test]
fn constant_names() {
    assert_eq!(const_name("cat", Path::new("dir/idle 2.txt")), "CAT_IDLE_2");
}
