use std::{
    io::Read,
    path::{Path, PathBuf},
};

use corridor_core::CorridorReportError;
use serde::Serialize;

/// path argument that reads the route block from stdin instead of a file
pub const STDIN_PATH: &str = "-";

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), CorridorReportError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| CorridorReportError::WriteError {
            path: dirspath.to_path_buf(),
            message: format!("error building output directory: {e}"),
        })
    } else {
        Ok(())
    }
}

/// reads the copied route summary text, from a file or from stdin when
/// the path is [`STDIN_PATH`].
pub fn read_route_block(path: &str) -> Result<String, CorridorReportError> {
    if path == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CorridorReportError::ReadError {
                path: PathBuf::from(STDIN_PATH),
                message: format!("failure reading route text from stdin: {e}"),
            })?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| CorridorReportError::ReadError {
        path: PathBuf::from(path),
        message: format!("failure reading route text: {e}"),
    })
}

/// writes `value` as pretty-printed JSON to `output_directory/filename`,
/// returning the path written.
pub fn write_json<T: Serialize>(
    value: &T,
    filename: &str,
    output_directory: &Path,
) -> Result<PathBuf, CorridorReportError> {
    create_dirs(output_directory)?;
    let path = output_directory.join(filename);
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        CorridorReportError::SerializationError(format!(
            "failure serializing '{filename}' as JSON: {e}"
        ))
    })?;
    std::fs::write(&path, json).map_err(|e| CorridorReportError::WriteError {
        path: path.clone(),
        message: format!("failure writing report: {e}"),
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("corridor-on511-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_write_json_creates_nested_directory() {
        let root = scratch_dir("write");
        let outdir = root.join("a").join("b");
        let written = write_json(&json!({ "count": 3 }), "route_report.json", &outdir).unwrap();
        assert_eq!(written, outdir.join("route_report.json"));
        let text = std::fs::read_to_string(&written).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["count"], 3);
        std::fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_read_route_block_from_file() {
        let root = scratch_dir("read");
        create_dirs(&root).unwrap();
        let path = root.join("route.txt");
        std::fs::write(&path, "Total Time: 45 min").unwrap();
        let text = read_route_block(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "Total Time: 45 min");
        std::fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_read_missing_file_is_read_error() {
        let result = read_route_block("/definitely/not/a/route.txt");
        assert!(matches!(result, Err(CorridorReportError::ReadError { .. })));
    }
}
