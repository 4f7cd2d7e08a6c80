//! Embedded frontend page
//!
//! A single self-contained HTML page served from `/`. It posts to `/scan`
//! and renders the ranked results with a per-listing risk badge; listings
//! above 60% risk are flagged as suspicious.

use axum::response::Html;

const PAGE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>BrandGuard - Brand Impersonation Scanner</title>
  <style>
    :root {
      --bg: #f8fafc;
      --card: #ffffff;
      --primary: #6366f1;
      --text: #1e293b;
      --muted: #64748b;
      --border: rgba(0,0,0,0.08);
      --danger: #ef4444;
      --safe: #10b981;
    }
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: system-ui, -apple-system, sans-serif;
      background: var(--bg);
      color: var(--text);
      min-height: 100vh;
      padding: 32px 16px;
    }
    .container { max-width: 860px; margin: 0 auto; }
    h1 { font-size: 24px; margin-bottom: 4px; }
    .subtitle { color: var(--muted); font-size: 14px; margin-bottom: 24px; }
    .scan-box {
      display: flex; gap: 8px; margin-bottom: 24px;
      background: var(--card); border: 1px solid var(--border);
      border-radius: 10px; padding: 16px;
    }
    .scan-box input {
      flex: 1; padding: 10px 12px; font-size: 15px;
      border: 1px solid var(--border); border-radius: 8px;
    }
    .scan-box button {
      padding: 10px 20px; font-size: 15px; font-weight: 600;
      color: white; background: var(--primary);
      border: none; border-radius: 8px; cursor: pointer;
    }
    .scan-box button:disabled { opacity: 0.6; cursor: wait; }
    table {
      width: 100%; border-collapse: collapse;
      background: var(--card); border: 1px solid var(--border);
      border-radius: 10px; overflow: hidden;
    }
    th, td { text-align: left; padding: 10px 14px; font-size: 14px; }
    th { background: var(--bg); color: var(--muted); font-weight: 600; }
    tr + tr td { border-top: 1px solid var(--border); }
    .risk-badge {
      display: inline-block; padding: 2px 10px; border-radius: 999px;
      font-weight: 600; font-size: 13px; color: white;
    }
    .risk-suspicious { background: var(--danger); }
    .risk-safe { background: var(--safe); }
    .detail { color: var(--muted); font-size: 13px; }
    .error { color: var(--danger); margin-bottom: 16px; }
  </style>
</head>
<body>
  <div class="container">
    <h1>BrandGuard</h1>
    <div class="subtitle">Compare a brand name against the app catalog and rank lookalikes by risk</div>
    <div class="scan-box">
      <input id="brandInput" placeholder="Brand name, e.g. PhonePe" autofocus>
      <button id="scanBtn">Scan</button>
    </div>
    <div id="errorBox" class="error" hidden></div>
    <table id="resultsTable" hidden>
      <thead>
        <tr><th>App name</th><th>Package</th><th>Publisher</th><th>Risk</th><th>Scores</th></tr>
      </thead>
      <tbody></tbody>
    </table>
  </div>
  <script>
    const input = document.getElementById('brandInput');
    const btn = document.getElementById('scanBtn');
    const table = document.getElementById('resultsTable');
    const errorBox = document.getElementById('errorBox');

    function esc(s) {
      const d = document.createElement('div');
      d.textContent = String(s == null ? '' : s);
      return d.innerHTML;
    }

    function render(results) {
      const tbody = table.querySelector('tbody');
      tbody.innerHTML = '';
      for (const r of results) {
        const cls = r.risk > 60 ? 'risk-suspicious' : 'risk-safe';
        const tr = document.createElement('tr');
        tr.innerHTML =
          '<td>' + esc(r.app_name) + '</td>' +
          '<td>' + esc(r.package) + '</td>' +
          '<td>' + esc(r.publisher) + '</td>' +
          '<td><span class="risk-badge ' + cls + '">' + r.risk + '%</span></td>' +
          '<td class="detail">name ' + r.nameScore + ' / pkg ' + r.pkgScore + ' / pub ' + r.pubScore + '</td>';
        tbody.appendChild(tr);
      }
      table.hidden = false;
    }

    async function runScan() {
      const brand = input.value.trim();
      errorBox.hidden = true;
      if (!brand) {
        errorBox.textContent = 'Please enter a brand name';
        errorBox.hidden = false;
        return;
      }
      btn.disabled = true;
      try {
        const res = await fetch('/scan', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ brand })
        });
        const body = await res.json();
        if (!res.ok) {
          errorBox.textContent = body.error || 'Scan failed';
          errorBox.hidden = false;
          return;
        }
        render(body.results);
      } catch (e) {
        errorBox.textContent = 'Scan failed: ' + e;
        errorBox.hidden = false;
      } finally {
        btn.disabled = false;
      }
    }

    btn.addEventListener('click', runScan);
    input.addEventListener('keydown', (e) => { if (e.key === 'Enter') runScan(); });
  </script>
</body>
</html>"##;

/// Serve the embedded scanner page
pub async fn scanner_page() -> Html<&'static str> {
    Html(PAGE)
}
