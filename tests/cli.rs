use std::{
    error::Error,
    fs,
    path::PathBuf,
    process::{Command, Output},
};

const BIN: &str = env!("CARGO_BIN_EXE_noisecipher");

/// A fresh, empty directory under the system temp dir for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("noisecipher-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(Command::new(BIN).args(args).env_remove("RUST_LOG").output()?)
}

#[test]
fn reports_every_written_file() -> Result<(), Box<dyn Error>> {
    let dir = scratch_dir("ab");
    let out_dir = dir.to_str().ok_or("temp dir is not utf-8")?;

    let output = run(&["AB", out_dir])?;

    assert_eq!(output.status.code(), Some(0));
    let expected = format!(
        "Wrote {} (secret at x=17,y=23)\nWrote {} (secret at x=109,y=33)\n",
        dir.join("img_000.ppm").display(),
        dir.join("img_001.ppm").display()
    );
    assert_eq!(String::from_utf8(output.stdout)?, expected);

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn hyphenated_secret_is_accepted() -> Result<(), Box<dyn Error>> {
    let dir = scratch_dir("hyphen");
    let out_dir = dir.to_str().ok_or("temp dir is not utf-8")?;

    let output = run(&["-flag-", out_dir, "8", "8"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_dir(&dir)?.count(), 6);

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn missing_arguments_exit_1() -> Result<(), Box<dyn Error>> {
    let output = run(&["only-text"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());

    Ok(())
}

#[test]
fn non_positive_size_exits_1_before_writing() -> Result<(), Box<dyn Error>> {
    let dir = scratch_dir("badsize");
    let out_dir = dir.to_str().ok_or("temp dir is not utf-8")?;

    for size in [["0", "8"], ["8", "-1"]] {
        let output = run(&["AB", out_dir, size[0], size[1]])?;

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8(output.stderr)?.contains("Bad size"));
    }
    assert!(!dir.exists());

    Ok(())
}

#[test]
fn unwritable_output_exits_1() -> Result<(), Box<dyn Error>> {
    let dir = scratch_dir("blocked");
    fs::create_dir_all(&dir)?;
    let blocker = dir.join("not-a-dir");
    fs::write(&blocker, b"")?;

    let output = run(&["AB", blocker.to_str().ok_or("temp dir is not utf-8")?])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn help_exits_0() -> Result<(), Box<dyn Error>> {
    let output = run(&["--help"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("Usage"));

    Ok(())
}
