//! 1ページUI
//!
//! タイトルブロック・サイドバー・入力フォーム・3つの結果タブ・
//! ダウンロードボタンを持つ静的HTML。APIへはfetchで送信します。

/// トップページのHTML
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Gerador SQL com IA</title>
<style>
  body {
    font-family: 'Segoe UI', sans-serif;
    margin: 0;
    background-color: #ffffff;
    color: #333333;
    display: flex;
  }
  .sidebar {
    width: 280px;
    min-height: 100vh;
    background-color: #f0f2f6;
    padding: 20px;
    box-sizing: border-box;
    font-size: 15px;
  }
  .sidebar h2 { font-size: 18px; color: #004c99; }
  .main { flex: 1; padding: 25px 40px; max-width: 900px; }
  .titulo-principal {
    text-align: center;
    background-color: #f0f2f6;
    padding: 30px;
    border-radius: 12px;
    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.05);
    margin-bottom: 25px;
  }
  .titulo-principal h1 { color: #004c99; font-size: 40px; margin-bottom: 10px; }
  .titulo-principal h2 { color: #336699; font-size: 26px; margin-bottom: 5px; }
  .titulo-principal h3 { color: #666666; font-size: 18px; margin-bottom: 15px; }
  .titulo-principal p, .titulo-principal ul {
    font-size: 16px;
    color: #333333;
    margin: 10px auto;
    max-width: 700px;
  }
  hr { border: none; border-top: 1px solid #cccccc; margin: 20px 0; }
  textarea {
    width: 100%;
    min-height: 110px;
    font-size: 16px;
    padding: 10px;
    box-sizing: border-box;
    border: 1px solid #cccccc;
    border-radius: 8px;
  }
  button {
    font-size: 16px;
    padding: 10px 18px;
    margin-top: 12px;
    border: none;
    border-radius: 8px;
    background-color: #004c99;
    color: #ffffff;
    cursor: pointer;
  }
  button:disabled { background-color: #999999; cursor: wait; }
  .warning { color: #8a6d3b; background-color: #fcf8e3; padding: 12px; border-radius: 8px; margin-top: 15px; }
  .error { color: #a94442; background-color: #f2dede; padding: 12px; border-radius: 8px; margin-top: 15px; }
  .hidden { display: none; }
  .tab-bar { margin-top: 25px; border-bottom: 1px solid #cccccc; }
  .tab-bar button {
    background: none;
    color: #336699;
    border-radius: 0;
    margin: 0;
  }
  .tab-bar button.active { border-bottom: 3px solid #004c99; color: #004c99; }
  .tab-panel { padding: 15px 5px; white-space: pre-wrap; }
  pre.sql {
    background-color: #f0f2f6;
    padding: 15px;
    border-radius: 8px;
    overflow-x: auto;
    font-size: 15px;
  }
</style>
</head>
<body>
  <aside class="sidebar">
    <h2>📘 Instruções</h2>
    <ul>
      <li>Descreva claramente o que deseja consultar.</li>
      <li>Clique no botão <b>Gerar Query SQL</b>.</li>
      <li>A IA vai gerar:
        <ul>
          <li>O template da consulta SQL</li>
          <li>Um exemplo da saída</li>
          <li>Uma explicação da consulta</li>
        </ul>
      </li>
      <li>Melhor descrição = melhor resultado!</li>
      <li><b>Importante</b>: revise sempre o resultado. A IA pode errar.</li>
    </ul>
    <button type="button" onclick="document.getElementById('suporte').classList.toggle('hidden')">📧 Suporte</button>
    <p id="suporte" class="hidden">Dúvidas? Envie um e-mail para: ulyssespontes82@gmail.com</p>
  </aside>

  <main class="main">
    <div class="titulo-principal">
      <h1>Gerador de Queries SQL com IA</h1>
      <h2>Text-to-SQL Automático</h2>
      <h3>por Ulysses Pontes</h3>
      <hr>
      <p>Este app utiliza IA para gerar automaticamente consultas SQL baseadas em descrições em linguagem natural.</p>
      <ul style="text-align: left;">
        <li>🧠 Geração inteligente da consulta SQL</li>
        <li>📊 Exemplo da saída esperada</li>
        <li>🧾 Explicação da sintaxe utilizada</li>
        <li>📥 Download do resultado em .sql</li>
      </ul>
      <hr>
    </div>

    <label for="descricao">📝 Descreva a consulta SQL que deseja:</label>
    <textarea id="descricao"></textarea>
    <br>
    <button id="gerar" type="button">⚙️ Gerar Query SQL</button>

    <div id="aviso" class="warning hidden"></div>
    <div id="erro" class="error hidden"></div>
    <p id="spinner" class="hidden">🤖 A IA está processando sua solicitação...</p>

    <div id="resultado" class="hidden">
      <div class="tab-bar">
        <button type="button" class="active" data-tab="tab-sql">🧾 Consulta SQL</button>
        <button type="button" data-tab="tab-saida">📊 Saída Esperada</button>
        <button type="button" data-tab="tab-explicacao">📚 Explicação</button>
      </div>
      <div id="tab-sql" class="tab-panel"><pre class="sql"><code id="sql-query"></code></pre></div>
      <div id="tab-saida" class="tab-panel hidden"></div>
      <div id="tab-explicacao" class="tab-panel hidden"></div>
      <button id="baixar" type="button">📥 Baixar Resultado</button>
    </div>
  </main>

<script>
  let bundle = null;

  const el = (id) => document.getElementById(id);
  const hide = (id) => el(id).classList.add('hidden');
  const show = (id) => el(id).classList.remove('hidden');

  document.querySelectorAll('.tab-bar button').forEach((btn) => {
    btn.addEventListener('click', () => {
      document.querySelectorAll('.tab-bar button').forEach((b) => b.classList.remove('active'));
      document.querySelectorAll('.tab-panel').forEach((p) => p.classList.add('hidden'));
      btn.classList.add('active');
      show(btn.dataset.tab);
    });
  });

  el('gerar').addEventListener('click', async () => {
    hide('aviso');
    hide('erro');
    hide('resultado');
    el('gerar').disabled = true;
    show('spinner');
    try {
      const resp = await fetch('/api/generate', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ description: el('descricao').value }),
      });
      if (!resp.ok) {
        const msg = await resp.text();
        if (resp.status === 422) {
          el('aviso').textContent = msg;
          show('aviso');
        } else {
          el('erro').textContent = msg;
          show('erro');
        }
        return;
      }
      bundle = await resp.json();
      el('sql-query').textContent = bundle.sql_query;
      el('tab-saida').textContent = bundle.expected_output || '';
      el('tab-explicacao').textContent = bundle.explanation || '';
      show('resultado');
    } catch (e) {
      el('erro').textContent = 'Erro ao gerar resposta: ' + e;
      show('erro');
    } finally {
      hide('spinner');
      el('gerar').disabled = false;
    }
  });

  el('baixar').addEventListener('click', async () => {
    if (!bundle) return;
    const resp = await fetch('/api/download', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(bundle),
    });
    const blob = await resp.blob();
    const url = URL.createObjectURL(blob);
    const a = document.createElement('a');
    a.href = url;
    a.download = 'dsa_resultado_query.sql';
    document.body.appendChild(a);
    a.click();
    a.remove();
    URL.revokeObjectURL(url);
  });
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_html_has_form_and_tabs() {
        assert!(INDEX_HTML.contains("Gerador de Queries SQL com IA"));
        assert!(INDEX_HTML.contains("id=\"descricao\""));
        assert!(INDEX_HTML.contains("Gerar Query SQL"));
        assert!(INDEX_HTML.contains("Consulta SQL"));
        assert!(INDEX_HTML.contains("Saída Esperada"));
        assert!(INDEX_HTML.contains("Explicação"));
        assert!(INDEX_HTML.contains("Baixar Resultado"));
    }
}
