use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const INSTALLER_PAYLOAD: &[u8] = b"MZ\x90\x00 not really an installer";

/// Serves a fake LunarG version marker and SDK download tree on an OS-assigned port.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn launch() -> anyhow::Result<Self> {
        let app = Router::new()
            .route("/sdk/latest/windows.txt", get(|| async { "1.2.3.4\n" }))
            .route(
                "/sdk/latest/moved.txt",
                get(|| async { Redirect::temporary("/sdk/latest/windows.txt") }),
            )
            .route(
                "/sdk/latest/garbage.txt",
                get(|| async { "<html>maintenance</html>" }),
            )
            .route("/sdk/download/{version}/windows/{file}", get(download));

        let listener = TcpListener::bind("127.0.0.1:0").await?; // 0: port picked by the OS
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, handle })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn download(Path((version, file)): Path<(String, String)>) -> Response {
    if file == format!("VulkanSDK-{version}-Installer.exe") {
        (StatusCode::OK, INSTALLER_PAYLOAD.to_vec()).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Answers a single connection with `response` verbatim, for replies axum would refuse to build.
pub async fn launch_raw(response: &'static [u8]) -> anyhow::Result<SocketAddr> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await;
            let _ = stream.write_all(response).await;
            let _ = stream.shutdown().await;
        }
    });

    Ok(addr)
}
