//! # Clientes Service ライブラリ
//!
//! 顧客 API のユースケース・ハンドラ・ルーター構築を公開する。
//! バイナリ（`main.rs`）と結合テスト（`tests/`）の両方から使う。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

pub use app_builder::build_app;
