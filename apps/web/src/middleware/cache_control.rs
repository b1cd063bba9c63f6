//! # キャッシュ制御ミドルウェア
//!
//! フォーム送信の応答がブラウザにキャッシュされないよう、
//! `/api/` 配下の応答に `Cache-Control: no-store` を設定する。
//! パニック時の 500 応答にも付与されるよう、`CatchPanicLayer` の外側に置く。
//! 静的ファイルには適用しない。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// `/api/` 配下の応答に `Cache-Control: no-store` を付与する
pub async fn no_cache(request: Request, next: Next) -> Response {
    let is_api = request.uri().path().starts_with("/api/");
    let mut response = next.run(request).await;
    if is_api {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
    response
}
