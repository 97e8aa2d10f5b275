//! Embedded HTML viewer page
//!
//! A self-contained browser page that opens the WebSocket push channel
//! and renders each `video-frame` message as a base64 JPEG image. Works
//! from any browser or WebView pointed at the server.

use axum::response::Html;

const VIEWER_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8" />
    <title>Streaming en vivo</title>
</head>
<body style="background:#111; color:#fff; text-align:center; margin:0; padding:0;">
    <h2 style="font-family:sans-serif;">&#128225; Streaming en vivo</h2>
    <img id="video" style="width:90%; max-width:600px; border:2px solid #fff;">

    <script>
        // Connect back to the same host the page was served from
        const proto = location.protocol === "https:" ? "wss" : "ws";
        const socket = new WebSocket(`${proto}://${location.host}/ws`);

        socket.onopen = () => {
            console.log("Conectado al servidor de streaming");
        };

        socket.onmessage = (event) => {
            const msg = JSON.parse(event.data);
            if (msg.type === "video-frame") {
                const img = document.getElementById("video");
                img.src = "data:image/jpeg;base64," + msg.frame;
            }
        };

        socket.onclose = () => {
            console.log("Desconectado del servidor");
        };
    </script>
</body>
</html>
"#;

/// GET /viewer - browser page that renders the live stream
pub async fn viewer_page() -> Html<&'static str> {
    Html(VIEWER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_page_targets_push_channel() {
        assert!(VIEWER_PAGE.contains("/ws"));
        assert!(VIEWER_PAGE.contains("video-frame"));
        assert!(VIEWER_PAGE.contains("base64"));
    }
}
