//! Input helpers: interactive lines, record files with optional zstd
//! compression, and record file discovery under a directory.

use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Reads one trimmed line; `None` on EOF or a read error.
///
/// ```rust
/// # use maketen_cli::io_utils::read_stdin_line;
/// let mut input = std::io::Cursor::new("  7 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("7".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a text file, decompressing it first when the name ends in `.zst`.
/// A leading UTF-8 BOM is stripped.
pub fn read_text_auto(path: &Path) -> Result<String, String> {
    let is_zst = path.extension().and_then(|e| e.to_str()) == Some("zst");
    let mut content = if is_zst {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// True for `*.jsonl` and `*.jsonl.zst`.
pub fn is_record_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|name| name.ends_with(".jsonl") || name.ends_with(".jsonl.zst"))
}

/// Walks `dir` recursively and returns every record file, sorted by path.
/// Unreadable subdirectories are skipped.
pub fn collect_record_files(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        let Ok(rd) = std::fs::read_dir(&d) else {
            continue;
        };
        for entry in rd.filter_map(Result::ok) {
            let p = entry.path();
            if p.is_dir() {
                stack.push(p);
            } else if is_record_file(&p) {
                found.push(p);
            }
        }
    }
    found.sort();
    found
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
