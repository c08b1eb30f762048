// ============================================================================
// PRINT TOKEN VIEW - Documento imprimible con el token de reserva
// ============================================================================

use crate::utils::escape_html;

const TOKEN_CSS: &str = r#"
        body {
            font-family: Arial, sans-serif;
            text-align: center;
            padding: 50px;
        }
        .token {
            font-size: 48px;
            font-weight: bold;
            padding: 20px;
            border: 3px solid #000;
            display: inline-block;
            margin: 20px 0;
        }"#;

/// Documento completo para la ventana de impresión. El token se escapa
/// porque puede no venir del servidor.
pub fn render_token_document(token: &str) -> String {
    let token = escape_html(token);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Reservation Token - {token}</title>
    <style>{css}
    </style>
</head>
<body>
    <h2>Your Reservation Token</h2>
    <div class="token">{token}</div>
    <p>Please show this token when collecting your meal</p>
</body>
</html>"#,
        token = token,
        css = TOKEN_CSS,
    )
}
