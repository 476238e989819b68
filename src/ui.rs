//! The single page served at `/`. Charts are plain inline SVG drawn by the
//! page script from the JSON API responses; no chart library.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Loaded Vehicle Forecast</title>
  <style>
    :root {
      --bg: #eef2f7;
      --ink: #24323f;
      --accent: #2563eb;
      --accent-2: #15803d;
      --warn: #b45309;
      --error: #b91c1c;
      --card: #ffffff;
      --line: rgba(36, 50, 63, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      display: grid;
      gap: 20px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3.5vw, 2.2rem);
    }

    header p {
      margin: 6px 0 0;
      color: #5b6876;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 20px;
      display: grid;
      gap: 14px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .controls {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: #5b6876;
    }

    input[type="number"] {
      padding: 10px;
      border: 1px solid var(--line);
      border-radius: 8px;
      font-size: 1rem;
    }

    input[type="range"] {
      width: 100%;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 8px;
      padding: 11px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button:disabled {
      background: #9db2d4;
      cursor: default;
    }

    .status {
      font-size: 0.95rem;
      min-height: 1.3em;
      color: #5b6876;
    }

    .status[data-type="error"] {
      color: var(--error);
    }

    .result {
      padding: 12px 14px;
      border-radius: 8px;
      font-size: 1rem;
      display: none;
    }

    .result[data-type="ok"] {
      display: block;
      background: #ecfdf3;
      color: var(--accent-2);
    }

    .result[data-type="warn"] {
      display: block;
      background: #fef6e7;
      color: var(--warn);
    }

    table {
      border-collapse: collapse;
      width: 100%;
      font-size: 0.92rem;
    }

    th, td {
      text-align: left;
      padding: 6px 10px;
      border-bottom: 1px solid var(--line);
    }

    th {
      color: #5b6876;
      font-weight: 600;
    }

    svg.chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-line.cumulative {
      stroke: var(--accent-2);
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: var(--line);
    }

    .chart-reference {
      stroke: var(--error);
      stroke-width: 2;
      stroke-dasharray: 6 6;
    }

    .chart-label {
      fill: #6b7683;
      font-size: 11px;
    }

    .fit-info {
      font-size: 0.85rem;
      color: #6b7683;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Loaded Vehicle Forecast</h1>
      <p>Upload daily loaded-vehicle counts, pick a target, and see when the cumulative total gets there.</p>
    </header>

    <section class="card">
      <h2>Data</h2>
      <form id="upload-form">
        <label>
          CSV file (columns: delivery_date, loaded_vehicles)
          <input type="file" id="file" name="file" accept=".csv,text/csv" />
        </label>
      </form>
      <div class="status" id="upload-status"></div>
      <div id="preview-wrap" hidden>
        <h2>Preview</h2>
        <table id="preview">
          <thead>
            <tr><th>delivery_date</th><th>loaded_vehicles</th></tr>
          </thead>
          <tbody></tbody>
        </table>
        <div class="status" id="preview-summary"></div>
      </div>
    </section>

    <section class="card">
      <h2>Forecast</h2>
      <div class="controls">
        <label>
          Target cumulative total
          <input type="number" id="target" value="1000000" min="1" step="100000" />
        </label>
        <label>
          Horizon: <span id="horizon-label">365</span> days
          <input type="range" id="horizon" min="30" max="1095" value="365" step="1" />
        </label>
        <button id="run" type="button" disabled>Run forecast</button>
      </div>
      <div class="result" id="result"></div>
      <div class="status" id="forecast-status"></div>
    </section>

    <section class="card">
      <h2>Daily loaded vehicles</h2>
      <svg id="daily-chart" class="chart" viewBox="0 0 640 280" role="img" aria-label="Daily chart"></svg>
    </section>

    <section class="card">
      <h2>Cumulative total</h2>
      <svg id="cumulative-chart" class="chart" viewBox="0 0 640 280" role="img" aria-label="Cumulative chart"></svg>
      <div class="fit-info" id="fit-info"></div>
    </section>
  </main>

  <script>
    const fileEl = document.getElementById('file');
    const uploadStatusEl = document.getElementById('upload-status');
    const previewWrapEl = document.getElementById('preview-wrap');
    const previewBodyEl = document.querySelector('#preview tbody');
    const previewSummaryEl = document.getElementById('preview-summary');
    const targetEl = document.getElementById('target');
    const horizonEl = document.getElementById('horizon');
    const horizonLabelEl = document.getElementById('horizon-label');
    const runEl = document.getElementById('run');
    const resultEl = document.getElementById('result');
    const forecastStatusEl = document.getElementById('forecast-status');
    const dailyChartEl = document.getElementById('daily-chart');
    const cumulativeChartEl = document.getElementById('cumulative-chart');
    const fitInfoEl = document.getElementById('fit-info');

    let uploaded = false;

    const setStatus = (el, message, type) => {
      el.textContent = message;
      el.dataset.type = type || '';
    };

    const renderLineChart = (svg, points, options = {}) => {
      if (!points.length) {
        svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 640;
      const height = 280;
      const paddingX = 64;
      const paddingY = 36;
      const top = 20;

      const values = points.map((point) => point.value);
      let min = Math.min(...values);
      let max = Math.max(...values);
      if (typeof options.reference === 'number') {
        min = Math.min(min, options.reference);
        max = Math.max(max, options.reference);
      }
      if (min === max) {
        min -= 1;
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 8}" y="${yPos + 4}" text-anchor="end">${value.toLocaleString(undefined, { maximumFractionDigits: 0 })}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(points.length / 6));
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = points.length <= 40
        ? points
            .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="3" />`)
            .join('')
        : '';

      let reference = '';
      if (typeof options.reference === 'number') {
        const yPos = y(options.reference);
        reference = `<line class="chart-reference" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        reference += `<text class="chart-label" x="${width - paddingX}" y="${yPos - 6}" text-anchor="end">${options.referenceLabel || ''}</text>`;
      }

      svg.innerHTML = `
        ${grid}
        <path class="chart-line ${options.lineClass || ''}" d="${path}" />
        ${circles}
        ${reference}
        ${xLabels}
      `;
    };

    const renderPreview = (summary) => {
      previewWrapEl.hidden = false;
      previewBodyEl.innerHTML = summary.preview
        .map((row) => `<tr><td>${row.delivery_date}</td><td>${row.loaded_vehicles}</td></tr>`)
        .join('');
      previewSummaryEl.textContent =
        `${summary.rows} rows, ${summary.start_date} to ${summary.end_date}`;
    };

    const renderForecast = (data) => {
      resultEl.textContent = data.message;
      resultEl.dataset.type = data.reached_on ? 'ok' : 'warn';

      renderLineChart(
        dailyChartEl,
        data.daily.map((point) => ({ label: point.date, value: point.value }))
      );
      renderLineChart(
        cumulativeChartEl,
        data.cumulative.map((point) => ({ label: point.date, value: point.total })),
        {
          reference: data.target,
          referenceLabel: `Target: ${data.target.toLocaleString()}`,
          lineClass: 'cumulative'
        }
      );
      fitInfoEl.textContent =
        `Fit: alpha=${data.fit.alpha.toFixed(2)}, beta=${data.fit.beta.toFixed(2)}`;
    };

    const runForecast = async () => {
      if (!uploaded) {
        return;
      }
      setStatus(forecastStatusEl, 'Running forecast...');
      runEl.disabled = true;
      try {
        const res = await fetch('/api/forecast', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            target: Number(targetEl.value),
            horizon_days: Number(horizonEl.value)
          })
        });
        if (!res.ok) {
          throw new Error(await res.text() || 'Forecast request failed');
        }
        renderForecast(await res.json());
        setStatus(forecastStatusEl, '');
      } catch (err) {
        setStatus(forecastStatusEl, err.message, 'error');
      } finally {
        runEl.disabled = !uploaded;
      }
    };

    const uploadFile = async (file) => {
      setStatus(uploadStatusEl, 'Uploading...');
      const body = new FormData();
      body.append('file', file);
      try {
        const res = await fetch('/api/upload', { method: 'POST', body });
        if (!res.ok) {
          throw new Error(await res.text() || 'Upload failed');
        }
        const summary = await res.json();
        uploaded = true;
        runEl.disabled = false;
        renderPreview(summary);
        setStatus(uploadStatusEl, 'File loaded.');
        await runForecast();
      } catch (err) {
        setStatus(uploadStatusEl, err.message, 'error');
      }
    };

    const loadPreview = async () => {
      try {
        const res = await fetch('/api/preview');
        if (!res.ok) {
          return;
        }
        const data = await res.json();
        if (data.uploaded) {
          uploaded = true;
          runEl.disabled = false;
          renderPreview(data.summary);
          await runForecast();
        } else {
          setStatus(uploadStatusEl, 'Upload a CSV to begin.');
        }
      } catch (err) {
        setStatus(uploadStatusEl, err.message, 'error');
      }
    };

    fileEl.addEventListener('change', () => {
      if (fileEl.files.length) {
        uploadFile(fileEl.files[0]);
      }
    });

    horizonEl.addEventListener('input', () => {
      horizonLabelEl.textContent = horizonEl.value;
    });
    horizonEl.addEventListener('change', runForecast);
    targetEl.addEventListener('change', runForecast);
    runEl.addEventListener('click', runForecast);

    loadPreview();
  </script>
</body>
</html>
"#;
