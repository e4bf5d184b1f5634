//! Utilidades auxiliares

/// Recorta una cadena a max_chars caracteres (¡no bytes!) desde el inicio.
/// Si la cadena es más larga, muestra "..." y el final.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let skip = char_count.saturating_sub(max_chars.saturating_sub(3));
        format!("...{}", s.chars().skip(skip).collect::<String>())
    }
}

/// Formatea un tamaño en bytes en forma legible.
///
/// Unidades B/KB/MB/GB en base 1024; un decimal sólo cuando el valor
/// escalado es menor que 10, la unidad no es B y el valor no es entero
/// (1024 → "1 KB", 1536 → "1.5 KB").
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit > 0 && value < 10.0 && value.fract() != 0.0 {
        format!("{:.1} {}", value, UNITS[unit])
    } else {
        format!("{:.0} {}", value, UNITS[unit])
    }
}

/// Título por defecto de un archivo: el nombre sin el último segmento
/// de extensión. Se usa tanto al crear una entrada como al reemplazarla.
pub fn default_title(file_name: &str) -> String {
    match file_name.rfind('.') {
        // El segmento tras el último punto debe ser no vacío
        Some(idx) if idx + 1 < file_name.len() => file_name[..idx].to_string(),
        _ => file_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(100), "100 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1100), "1.1 KB");
        assert_eq!(format_size(10240), "10 KB");
        assert_eq!(format_size(102400), "100 KB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(1024 * 1024 + 512 * 1024), "1.5 MB");
        assert_eq!(format_size(1024 * 1024 * 5), "5 MB");
    }

    #[test]
    fn test_format_size_gigabytes() {
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
        // No hay unidad mayor: a partir de GB ya no se escala
        assert_eq!(format_size(1024u64 * 1024 * 1024 * 2048), "2048 GB");
    }

    #[test]
    fn test_default_title_strips_last_extension() {
        assert_eq!(default_title("photo.png"), "photo");
        assert_eq!(default_title("archivo.tar.gz"), "archivo.tar");
        assert_eq!(default_title("sin_extension"), "sin_extension");
    }

    #[test]
    fn test_default_title_edge_cases() {
        // Punto final sin segmento: se conserva tal cual
        assert_eq!(default_title("raro."), "raro.");
        // Nombre que es sólo extensión: queda vacío
        assert_eq!(default_title(".gitignore"), "");
        assert_eq!(default_title(""), "");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("corto.png", 20), "corto.png");
        assert_eq!(
            truncate_string("nombre_de_archivo_muy_largo.png", 15),
            "...uy_largo.png"
        );
        // Seguro con UTF-8 multibyte
        assert_eq!(truncate_string("fotografía.png", 50), "fotografía.png");
    }
}
