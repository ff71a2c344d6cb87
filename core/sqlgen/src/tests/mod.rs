//! アプリケーションレベルのテスト

mod routes_tests;
