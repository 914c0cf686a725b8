pub fn render_index(date: &str, count: u64, phrase: &str, recorded: u64) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{COUNT}}", &count.to_string())
        .replace("{{PHRASE}}", phrase)
        .replace("{{TODAY}}", &recorded.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tasbeeh Counter</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #fdf8f2;
      --bg-2: #f0dcd2;
      --ink: #2b2a28;
      --maroon: #800000;
      --maroon-soft: rgba(128, 0, 0, 0.08);
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(128, 0, 0, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), #fbeee4 60%, #f8f1ea 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(520px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
      color: var(--maroon);
    }

    .subtitle {
      margin: 0;
      color: #6b645d;
      font-size: 0.95rem;
    }

    .counter {
      display: grid;
      gap: 6px;
      padding: 28px 0;
      border-radius: 22px;
      background: var(--maroon-soft);
      cursor: pointer;
      user-select: none;
      transition: transform 120ms ease;
    }

    .counter:active {
      transform: scale(0.985);
    }

    #count {
      font-size: 4.6rem;
      font-weight: 600;
      color: var(--maroon);
      line-height: 1;
    }

    #phrase {
      font-size: 1.3rem;
      color: #4a4540;
    }

    .hint {
      margin: 0;
      color: #8b857d;
      font-size: 0.85rem;
    }

    .progress {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      padding: 14px 18px;
      border-radius: 16px;
      border: 1px solid rgba(128, 0, 0, 0.12);
    }

    .progress .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .progress .value {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--maroon);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: transparent;
      color: var(--maroon);
      border: 1px solid rgba(128, 0, 0, 0.35);
    }

    button:active {
      transform: scale(0.98);
    }

    .status {
      font-size: 0.9rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Tasbeeh</h1>
      <p class="subtitle"><span id="date">{{DATE}}</span> &middot; counts reset each day</p>
    </header>

    <div class="counter" id="tap-area" role="button" aria-label="Count one">
      <span id="count">{{COUNT}}</span>
      <span id="phrase">{{PHRASE}}</span>
    </div>

    <p class="hint">Tap the counter &mdash; the phrase changes every 33 counts</p>

    <div class="progress">
      <span class="label">Recorded today</span>
      <span class="value" id="today">{{TODAY}}</span>
    </div>

    <form id="reset-form" method="post" action="/reset">
      <button type="submit">Reset Today</button>
    </form>

    <div class="status" id="status"></div>
  </main>

  <script>
    const countEl = document.getElementById('count');
    const phraseEl = document.getElementById('phrase');
    const dateEl = document.getElementById('date');
    const todayEl = document.getElementById('today');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateCounter = (data) => {
      dateEl.textContent = data.date;
      countEl.textContent = data.count;
      phraseEl.textContent = data.phrase;
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load today total');
      }
      const data = await res.json();
      todayEl.textContent = data.count;
    };

    const tap = async () => {
      const res = await fetch('/api/tap', { method: 'POST' });
      if (!res.ok) {
        throw new Error(await res.text() || 'Tap failed');
      }
      updateCounter(await res.json());
      await loadToday();
    };

    document.getElementById('tap-area').addEventListener('click', () => {
      tap().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reset-form').addEventListener('submit', (event) => {
      event.preventDefault();
      fetch('/api/reset', { method: 'POST' })
        .then((res) => {
          if (!res.ok) {
            throw new Error('Reset failed');
          }
          return res.json();
        })
        .then((data) => {
          updateCounter(data);
          return loadToday();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });
  </script>
</body>
</html>
"#;
