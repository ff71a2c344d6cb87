//! LLMに送る3種類のプロンプトの整形
//!
//! クエリ生成は説明文のみに依存し、期待される出力と説明の2つは
//! 生成済みのSQLクエリを埋め込みます。

use crate::domain::description::UserDescription;

/// SQLクエリ生成のプロンプト
pub fn query_prompt(description: &UserDescription) -> String {
    format!(
        "Crie de forma clara, objetiva e profissional, uma consulta SQL baseada neste texto: {}",
        description.as_str()
    )
}

/// 期待される出力例のプロンプト
pub fn expected_output_prompt(sql_query: &str) -> String {
    format!("Mostre um exemplo da saída esperada para: {}", sql_query)
}

/// クエリ構文の説明のプロンプト
pub fn explanation_prompt(sql_query: &str) -> String {
    format!(
        "Avalie e detalhe a explicação da sintaxe desta consulta SQL, descrevendo cada cláusula e função utilizada: {}",
        sql_query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_prompt_embeds_description() {
        let desc = UserDescription::parse("list all customers from Brazil").unwrap();
        let prompt = query_prompt(&desc);
        assert!(prompt.contains("list all customers from Brazil"));
        assert!(prompt.contains("consulta SQL"));
    }

    #[test]
    fn test_expected_output_prompt_embeds_query() {
        let prompt = expected_output_prompt("SELECT * FROM clientes");
        assert!(prompt.contains("SELECT * FROM clientes"));
        assert!(prompt.contains("saída esperada"));
    }

    #[test]
    fn test_explanation_prompt_embeds_query() {
        let prompt = explanation_prompt("SELECT * FROM clientes");
        assert!(prompt.contains("SELECT * FROM clientes"));
        assert!(prompt.contains("cláusula"));
    }
}
