/// Texto de búsqueda normalizado (minúsculas)
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Una fila es visible si su texto contiene la búsqueda, sin distinguir mayúsculas.
/// `query` ya viene normalizado.
pub fn row_matches(row_text: &str, query: &str) -> bool {
    query.is_empty() || row_text.to_lowercase().contains(query)
}
