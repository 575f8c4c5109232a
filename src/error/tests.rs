// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, ProcessError, Result};

#[test]
fn test_config_error_display() {
    let err = ConfigError::invalid("environment", "vars", "missing '=' in 'LANG'");
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'vars' in section '[environment]': missing '=' in 'LANG'"
    );
}

#[test]
fn test_process_error_display() {
    let err = ProcessError::NonZeroExit {
        command: "make".to_string(),
        code: 2,
    };
    insta::assert_snapshot!(err.to_string(), @"process 'make' exited with code 2");
}

#[test]
fn test_process_error_downcasts_through_anyhow() {
    fn find() -> Result<()> {
        Err(ProcessError::ExecutableNotFound {
            name: "nope".to_string(),
        }
        .into())
    }

    let err = find().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::ExecutableNotFound { name }) if name == "nope"
    ));
    insta::assert_snapshot!(err.to_string(), @"executable not found: 'nope' (not in PATH)");
}
