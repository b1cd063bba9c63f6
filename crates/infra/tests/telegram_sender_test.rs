//! TelegramNotificationSender の統合テスト
//!
//! httpmock で Bot API を模したサーバーを立て、実際の HTTP 往復で検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p gazeta-infra --test telegram_sender_test
//! ```

use gazeta_domain::notification::NotificationError;
use gazeta_infra::{NotificationSender, TelegramConfig, TelegramNotificationSender};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

const TOKEN: &str = "123456:TEST-secret-token";
const CHAT_ID: &str = "-100200300";

fn sender_for(server: &MockServer) -> TelegramNotificationSender {
    TelegramNotificationSender::new(TelegramConfig {
        bot_token:    Some(TOKEN.to_string()),
        chat_id:      Some(CHAT_ID.to_string()),
        api_base_url: server.base_url(),
    })
}

#[tokio::test]
async fn test_sendmessageへhtmlパースモードで送信する() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/bot{TOKEN}/sendMessage"))
                .header("content-type", "application/json")
                .json_body(json!({
                    "chat_id": CHAT_ID,
                    "text": "📋 ЗАКАЗ ПРОЕКТА\n<b>Клиент:</b> Ivan Petrov",
                    "parse_mode": "HTML",
                }));
            then.status(200)
                .json_body(json!({ "ok": true, "result": { "message_id": 77 } }));
        })
        .await;

    let receipt = sender_for(&server)
        .send("📋 ЗАКАЗ ПРОЕКТА\n<b>Клиент:</b> Ivan Petrov")
        .await
        .unwrap();

    api_mock.assert_async().await;
    assert_eq!(receipt.raw["result"]["message_id"], json!(77));
}

#[tokio::test]
async fn test_非2xx応答はapiの説明付きでdeliveryエラー() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(format!("/bot{TOKEN}/sendMessage"));
            then.status(400).json_body(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found",
            }));
        })
        .await;

    let result = sender_for(&server).send("hello").await;

    api_mock.assert_async().await;
    assert_eq!(
        result,
        Err(NotificationError::Delivery(
            "Telegram API 400: Bad Request: chat not found".to_string()
        ))
    );
}

#[tokio::test]
async fn test_json以外のエラー応答は本文をそのまま理由にする() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(502).body("upstream unavailable");
        })
        .await;

    let result = sender_for(&server).send("hello").await;

    assert_eq!(
        result,
        Err(NotificationError::Delivery(
            "Telegram API 502: upstream unavailable".to_string()
        ))
    );
}

#[tokio::test]
async fn test_接続失敗のエラーにトークンを含めない() {
    // 予約ポートで待ち受けているサーバーはないため接続に失敗する
    let sender = TelegramNotificationSender::new(TelegramConfig {
        bot_token:    Some(TOKEN.to_string()),
        chat_id:      Some(CHAT_ID.to_string()),
        api_base_url: "http://127.0.0.1:9".to_string(),
    });

    let err = sender.send("hello").await.unwrap_err();

    let NotificationError::Delivery(reason) = &err else {
        panic!("Delivery エラーであること: {err:?}");
    };
    assert!(!reason.contains(TOKEN), "理由にトークンが含まれている: {reason}");
}

#[tokio::test]
async fn test_チャットid未設定ならapiを呼ばない() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200);
        })
        .await;
    let sender = TelegramNotificationSender::new(TelegramConfig {
        bot_token:    Some(TOKEN.to_string()),
        chat_id:      None,
        api_base_url: server.base_url(),
    });

    let result = sender.send("hello").await;

    assert_eq!(result, Err(NotificationError::NotConfigured));
    api_mock.assert_hits_async(0).await;
}
