pub fn page() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Vape Insights</title>
  <style>
    :root {
      --bg-1: #17141f;
      --bg-2: #241d33;
      --ink: #efeaff;
      --muted: #9d93b8;
      --accent: #a389f7;
      --accent-soft: #c599ff;
      --up: #ff7a7a;
      --down: #7adca0;
      --card: #1e1930;
      --line: rgba(163, 137, 247, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, var(--bg-2), var(--bg-1) 65%);
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 36px 16px 56px;
    }

    .app {
      width: min(880px, 100%);
      display: grid;
      gap: 22px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      letter-spacing: 0.01em;
    }

    header p {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 20px;
    }

    .who {
      display: flex;
      gap: 10px;
      align-items: center;
      flex-wrap: wrap;
    }

    .who label {
      color: var(--muted);
      font-size: 0.95rem;
    }

    input, select {
      background: var(--bg-1);
      border: 1px solid var(--line);
      border-radius: 8px;
      color: var(--ink);
      padding: 8px 10px;
      font-size: 0.95rem;
    }

    input:focus, select:focus {
      outline: 1px solid var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 9px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: #14101f;
    }

    button.ghost {
      background: transparent;
      color: var(--accent);
      border: 1px solid var(--accent);
    }

    .tiles {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    .tile .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .tile .value {
      display: block;
      margin-top: 6px;
      font-size: 1.35rem;
      font-weight: 600;
    }

    .value.increase { color: var(--up); }
    .value.decrease { color: var(--down); }

    .forms {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 14px;
    }

    .forms h2 {
      margin: 0 0 12px;
      font-size: 1.05rem;
    }

    .forms form {
      display: grid;
      gap: 10px;
    }

    .field {
      display: grid;
      gap: 4px;
    }

    .field span {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 6px;
      flex-wrap: wrap;
    }

    .tab {
      background: transparent;
      border: 1px solid var(--line);
      color: var(--muted);
      font-weight: 500;
    }

    .tab.active {
      background: var(--accent);
      border-color: var(--accent);
      color: #14101f;
      font-weight: 600;
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
      margin-top: 14px;
    }

    .axis-label {
      fill: var(--muted);
      font-size: 11px;
      font-family: "Trebuchet MS", sans-serif;
    }

    .gridline {
      stroke: var(--line);
    }

    .series-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 2.5;
    }

    .series-point {
      fill: var(--card);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .series-bar {
      fill: var(--accent-soft);
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status[data-type="error"] { color: var(--up); }
    .status[data-type="ok"] { color: var(--down); }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Vape Insights</h1>
      <p>Log check-ins and devices, watch the weekly trend bend down.</p>
    </header>

    <section class="card who">
      <label for="username">Tracking for</label>
      <input id="username" value="me" autocomplete="off" />
      <button class="ghost" id="load-btn" type="button">Load insights</button>
      <div class="status" id="status"></div>
    </section>

    <section class="card tiles">
      <div class="tile">
        <span class="label">Mood this week</span>
        <span class="value" id="mood-tile">&mdash;</span>
      </div>
      <div class="tile">
        <span class="label">Usage vs last week</span>
        <span class="value" id="usage-tile">&mdash;</span>
      </div>
      <div class="tile">
        <span class="label">Spending vs last week</span>
        <span class="value" id="spend-tile">&mdash;</span>
      </div>
      <div class="tile">
        <span class="label">Yearly savings on track</span>
        <span class="value" id="savings-tile">&mdash;</span>
      </div>
    </section>

    <section class="card">
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="energy">Energy</button>
        <button class="tab" type="button" data-tab="puffs">Puffs</button>
        <button class="tab" type="button" data-tab="cost">Spending</button>
      </div>
      <svg id="chart" viewBox="0 0 640 280" role="img" aria-label="Weekly chart"></svg>
    </section>

    <section class="forms">
      <div class="card">
        <h2>Daily check-in</h2>
        <form id="daily-form">
          <label class="field"><span>Date</span>
            <input id="daily-date" type="date" required />
          </label>
          <label class="field"><span>Energy (1-10, optional)</span>
            <input id="daily-energy" type="number" min="1" max="10" step="1" />
          </label>
          <label class="field"><span>Mood (optional)</span>
            <select id="daily-mood">
              <option value="">&mdash;</option>
              <option value="1">Great</option>
              <option value="2">Good</option>
              <option value="3">Neutral</option>
              <option value="4">Sad</option>
              <option value="5">Upset</option>
              <option value="6">Irritated/Angry</option>
            </select>
          </label>
          <button type="submit">Log check-in</button>
        </form>
      </div>
      <div class="card">
        <h2>Finished device</h2>
        <form id="session-form">
          <label class="field"><span>First day used</span>
            <input id="session-start" type="date" required />
          </label>
          <label class="field"><span>Last day used</span>
            <input id="session-end" type="date" required />
          </label>
          <label class="field"><span>Total puffs</span>
            <input id="session-puffs" type="number" min="0" step="1" required />
          </label>
          <label class="field"><span>Cost ($)</span>
            <input id="session-cost" type="number" min="0" step="0.01" required />
          </label>
          <button type="submit">Log device</button>
        </form>
      </div>
    </section>
  </main>

  <script>
    const usernameEl = document.getElementById('username');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const moodTile = document.getElementById('mood-tile');
    const usageTile = document.getElementById('usage-tile');
    const spendTile = document.getElementById('spend-tile');
    const savingsTile = document.getElementById('savings-tile');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let insights = null;
    let activeTab = 'energy';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const direction = (pct) => (pct > 0 ? 'up' : pct < 0 ? 'down' : 'flat');

    const renderTiles = () => {
      moodTile.textContent = insights.dominant_mood_text;

      const usageDir = direction(insights.puffs_change_pct);
      usageTile.textContent = usageDir === 'flat'
        ? 'no change'
        : `${usageDir} ${insights.puffs_change_text}`;
      usageTile.className = 'value ' + (insights.puffs_change_pct > 0 ? 'increase'
        : insights.puffs_change_pct < 0 ? 'decrease' : '');

      const spendDir = direction(insights.cost_delta);
      spendTile.textContent = spendDir === 'flat'
        ? 'no change'
        : `${spendDir} ${insights.cost_delta_text}`;
      spendTile.className = 'value ' + (insights.cost_delta > 0 ? 'increase'
        : insights.cost_delta < 0 ? 'decrease' : '');

      savingsTile.textContent = insights.savings_text || '—';
      savingsTile.className = 'value ' + (insights.savings_text ? 'decrease' : '');
    };

    const chartFrame = (values, fixedMax) => {
      const width = 640, height = 280, padX = 46, padY = 32, top = 18;
      let min = 0;
      let max = fixedMax != null ? fixedMax : Math.max(...values, 1);
      if (max === min) max = min + 1;
      const innerW = width - padX * 2;
      const innerH = height - top - padY;
      const x = (i, n) => n > 1 ? padX + (innerW * i) / (n - 1) : padX + innerW / 2;
      const y = (v) => height - padY - ((v - min) / (max - min)) * innerH;

      let grid = '';
      const ticks = 4;
      for (let i = 0; i <= ticks; i += 1) {
        const v = min + ((max - min) * i) / ticks;
        grid += `<line class="gridline" x1="${padX}" y1="${y(v)}" x2="${width - padX}" y2="${y(v)}" />`;
        grid += `<text class="axis-label" x="${padX - 8}" y="${y(v) + 4}" text-anchor="end">${Math.round(v * 10) / 10}</text>`;
      }
      return { width, height, padX, padY, x, y, grid };
    };

    const xLabels = (labels, frame) => {
      const every = labels.length > 6 ? 2 : 1;
      return labels.map((label, i) => {
        if (i % every !== 0) return '';
        return `<text class="axis-label" x="${frame.x(i, labels.length)}" y="${frame.height - frame.padY + 18}" text-anchor="middle">${label}</text>`;
      }).join('');
    };

    const renderLine = (labels, values, fixedMax) => {
      const frame = chartFrame(values, fixedMax);
      const path = values
        .map((v, i) => `${i === 0 ? 'M' : 'L'} ${frame.x(i, values.length).toFixed(1)} ${frame.y(v).toFixed(1)}`)
        .join(' ');
      const dots = values
        .map((v, i) => `<circle class="series-point" cx="${frame.x(i, values.length)}" cy="${frame.y(v)}" r="4" />`)
        .join('');
      chartEl.innerHTML = frame.grid + `<path class="series-line" d="${path}" />` + dots + xLabels(labels, frame);
    };

    const renderBars = (labels, values) => {
      const frame = chartFrame(values);
      const slot = (frame.width - frame.padX * 2) / Math.max(values.length, 1);
      const barW = Math.min(46, slot * 0.6);
      const bars = values.map((v, i) => {
        const cx = frame.x(i, values.length);
        const yTop = frame.y(v);
        return `<rect class="series-bar" x="${cx - barW / 2}" y="${yTop}" width="${barW}" height="${frame.height - frame.padY - yTop}" rx="4" />`;
      }).join('');
      chartEl.innerHTML = frame.grid + bars + xLabels(labels, frame);
    };

    const renderChart = () => {
      const series = insights[activeTab];
      if (!series || series.values.length === 0) {
        chartEl.innerHTML = '<text class="axis-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }
      if (activeTab === 'energy') {
        renderLine(series.labels, series.values, 10);
      } else if (activeTab === 'cost') {
        renderBars(series.labels, series.values);
      } else {
        renderLine(series.labels, series.values);
      }
    };

    const renderAll = () => {
      if (!insights) return;
      renderTiles();
      renderChart();
    };

    const loadInsights = async () => {
      const username = usernameEl.value.trim();
      if (!username) {
        setStatus('Enter a name first', 'error');
        return;
      }
      const res = await fetch(`/api/insights/${encodeURIComponent(username)}`);
      if (res.status === 404) {
        insights = null;
        chartEl.innerHTML = '';
        setStatus(`Nothing logged yet for ${username}`, '');
        return;
      }
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to load insights');
      }
      insights = await res.json();
      renderAll();
      setStatus('', '');
    };

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        activeTab = button.dataset.tab;
        tabs.forEach((b) => b.classList.toggle('active', b === button));
        renderChart();
      });
    });

    document.getElementById('load-btn').addEventListener('click', () => {
      loadInsights().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('daily-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const username = usernameEl.value.trim();
      const energy = document.getElementById('daily-energy').value;
      const mood = document.getElementById('daily-mood').value;
      const body = { date: document.getElementById('daily-date').value };
      if (energy !== '') body.energy = Number(energy);
      if (mood !== '') body.mood = Number(mood);
      post(`/api/log/${encodeURIComponent(username)}/daily`, body)
        .then(() => { setStatus('Check-in saved', 'ok'); return loadInsights(); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('session-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const username = usernameEl.value.trim();
      const body = {
        start_date: document.getElementById('session-start').value,
        end_date: document.getElementById('session-end').value,
        puffs: Number(document.getElementById('session-puffs').value),
        cost: Number(document.getElementById('session-cost').value)
      };
      post(`/api/log/${encodeURIComponent(username)}/session`, body)
        .then(() => { setStatus('Device saved', 'ok'); return loadInsights(); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('daily-date').value = new Date().toISOString().slice(0, 10);
    loadInsights().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
