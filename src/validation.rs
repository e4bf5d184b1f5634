//! Política de validación de archivos seleccionados

use crate::item::{FileRef, Issue};

/// Tamaño máximo recomendado en MB
pub const MAX_MB: u64 = 5;

/// Tamaño máximo recomendado en bytes
pub const MAX_BYTES: u64 = MAX_MB * 1024 * 1024;

/// Valida un archivo y devuelve los hallazgos en orden: primero el tipo,
/// después el tamaño. La validación es consultiva: ningún hallazgo impide
/// añadir o reemplazar la entrada.
pub fn validate_file(file: &FileRef) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !file.is_image() {
        issues.push(Issue::bad("No es una imagen válida."));
    }
    if file.size > MAX_BYTES {
        issues.push(Issue::warn(format!("Excede {} MB.", MAX_MB)));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::IssueLevel;
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> FileRef {
        let path = PathBuf::from(name);
        FileRef {
            mime: crate::item::mime_from_path(&path),
            name: name.to_string(),
            path,
            size,
        }
    }

    #[test]
    fn test_valid_image_has_no_issues() {
        assert!(validate_file(&file("foto.png", 1024)).is_empty());
        assert!(validate_file(&file("foto.jpg", MAX_BYTES)).is_empty());
    }

    #[test]
    fn test_non_image_is_bad() {
        let issues = validate_file(&file("doc.pdf", 1024));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Bad);
        assert_eq!(issues[0].text, "No es una imagen válida.");
    }

    #[test]
    fn test_unknown_type_is_bad() {
        let issues = validate_file(&file("datos.xyz", 1024));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Bad);
    }

    #[test]
    fn test_size_threshold_boundary() {
        // Exactamente 5 MiB: sin aviso
        assert!(validate_file(&file("grande.png", MAX_BYTES)).is_empty());

        // Un byte más: aviso
        let issues = validate_file(&file("grande.png", MAX_BYTES + 1));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Warn);
        assert_eq!(issues[0].text, "Excede 5 MB.");
    }

    #[test]
    fn test_issues_keep_order_type_then_size() {
        let issues = validate_file(&file("pelicula.xyz", MAX_BYTES * 2));
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].level, IssueLevel::Bad);
        assert_eq!(issues[1].level, IssueLevel::Warn);
    }
}
