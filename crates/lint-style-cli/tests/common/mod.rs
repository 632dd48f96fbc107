//! Shared fixture for CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A file with no style violations.
pub const GOOD_LEAN: &str = "/-
Copyright (c) 2017 Johannes Hölzl. All rights reserved.
Released under Apache 2.0 license as described in the file LICENSE.
Authors: Johannes Hölzl
-/
import logic.basic

/-!
# Booleans

Basic lemmas about `bool`.
-/

namespace bool

theorem coe_tt : (tt : Prop) = true := rfl

end bool
";

/// A file missing both the copyright header and the module docstring.
pub const BAD_LEAN: &str = "example : 37 = 37\n";

/// Relative location of the ledger in a fixture repository.
pub const LEDGER: &str = "scripts/style-exceptions.txt";

/// A throwaway repository with a `lint-style.toml` scanning `src/`.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("lint-style.toml"),
            "[discovery]\ninclude = [\"src\"]\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("scripts")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).unwrap()
    }

    /// `lint-style` run from the fixture root.
    pub fn lint(&self) -> Command {
        self.command(env!("CARGO_BIN_EXE_lint-style"))
    }

    /// `update-style-exceptions` run from the fixture root.
    pub fn update(&self) -> Command {
        self.command(env!("CARGO_BIN_EXE_update-style-exceptions"))
    }

    fn command(&self, exe: &str) -> Command {
        let mut cmd = Command::new(exe);
        cmd.current_dir(self.root())
            .env("LINT_STYLE_ROOT", self.root())
            .env_remove("RUST_LOG");
        cmd
    }
}
