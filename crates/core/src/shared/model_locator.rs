use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::MODEL_DIR_ENV;

#[derive(Error, Debug)]
pub enum ModelLocateError {
    #[error("model path {0} does not exist or is not a file")]
    NotAFile(PathBuf),
    #[error("model {name} not found; searched {searched:?}")]
    NotFound { name: String, searched: Vec<PathBuf> },
}

/// Locate a bundled model file by name.
///
/// Resolution order:
/// 1. Explicit path, when given (missing explicit paths are an error, not
///    a fallthrough)
/// 2. Directory named by the `VIGIL_MODEL_DIR` environment variable
/// 3. Bundled directory (defaults to `models/` beside the executable)
///
/// Weights ship with the install; there is no download path.
pub fn locate(
    name: &str,
    explicit: Option<&Path>,
    bundled_dir: Option<&Path>,
) -> Result<PathBuf, ModelLocateError> {
    let env_dir = env::var_os(MODEL_DIR_ENV).map(PathBuf::from);
    locate_in(name, explicit, env_dir.as_deref(), bundled_dir)
}

/// Directory of model files shipped next to the executable, if resolvable.
pub fn default_bundled_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("models")))
}

fn locate_in(
    name: &str,
    explicit: Option<&Path>,
    env_dir: Option<&Path>,
    bundled_dir: Option<&Path>,
) -> Result<PathBuf, ModelLocateError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(ModelLocateError::NotAFile(path.to_path_buf()));
    }

    let mut searched = Vec::new();
    for dir in [env_dir, bundled_dir].into_iter().flatten() {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    Err(ModelLocateError::NotFound {
        name: name.to_string(),
        searched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let tmp = TempDir::new().unwrap();
        let model = tmp.path().join("custom.onnx");
        fs::write(&model, b"weights").unwrap();

        let found = locate_in("ignored.onnx", Some(&model), None, None).unwrap();
        assert_eq!(found, model);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("absent.onnx");

        let err = locate_in("model.onnx", Some(&missing), None, Some(tmp.path()));
        assert!(matches!(err, Err(ModelLocateError::NotAFile(_))));
    }

    #[test]
    fn test_env_dir_checked_before_bundled() {
        let tmp = TempDir::new().unwrap();
        let env_dir = tmp.path().join("env");
        let bundled = tmp.path().join("bundled");
        fs::create_dir_all(&env_dir).unwrap();
        fs::create_dir_all(&bundled).unwrap();
        fs::write(env_dir.join("model.onnx"), b"env").unwrap();
        fs::write(bundled.join("model.onnx"), b"bundled").unwrap();

        let found = locate_in("model.onnx", None, Some(&env_dir), Some(&bundled)).unwrap();
        assert_eq!(found, env_dir.join("model.onnx"));
    }

    #[test]
    fn test_falls_back_to_bundled_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("model.onnx"), b"bundled").unwrap();

        let found = locate_in("model.onnx", None, None, Some(tmp.path())).unwrap();
        assert_eq!(found, tmp.path().join("model.onnx"));
    }

    #[test]
    fn test_not_found_reports_searched_paths() {
        let tmp = TempDir::new().unwrap();
        let err = locate_in("model.onnx", None, None, Some(tmp.path()));
        match err {
            Err(ModelLocateError::NotFound { name, searched }) => {
                assert_eq!(name, "model.onnx");
                assert_eq!(searched, vec![tmp.path().join("model.onnx")]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
