/// Full month name, 1-based; anything outside `1..=12` reads "Invalid Month".
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

pub fn month_name_short(month: u32) -> &'static str {
    match month {
        1..=12 => &month_name(month)[..3],
        _ => month_name(month),
    }
}

/// Mood shown inside the donut for a given healthy percentage.
pub fn mood_emoji(percentage: u32) -> &'static str {
    match percentage {
        95.. => "❤️",
        90..=94 => "🤩",
        80..=89 => "😍",
        70..=79 => "🙂",
        60..=69 => "😮‍💨",
        50..=59 => "😐",
        40..=49 => "😟",
        30..=39 => "😧",
        20..=29 => "😨",
        10..=19 => "😱",
        _ => "💀",
    }
}

pub fn render_index(bootstrap: &str) -> String {
    INDEX_HTML.replace("{{BOOTSTRAP}}", bootstrap)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Emoji Calendar</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f1f6ec;
      --bg-2: #cde8c5;
      --ink: #27312a;
      --accent: #4f9d69;
      --accent-2: #35524a;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(53, 82, 74, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e6f2de 60%, #f4f7ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6156;
      font-size: 1rem;
    }

    .layout {
      display: grid;
      grid-template-columns: minmax(0, 1fr) 260px;
      gap: 28px;
      align-items: start;
    }

    .calendar {
      display: grid;
      gap: 14px;
    }

    .calendar-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .calendar-head h2 {
      margin: 0;
      font-size: 1.4rem;
      font-family: "Fraunces", "Georgia", serif;
    }

    .nav {
      display: flex;
      gap: 6px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      font-family: inherit;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.96);
    }

    .nav button,
    .today-btn {
      background: white;
      color: var(--accent-2);
      border: 1px solid rgba(53, 82, 74, 0.14);
      padding: 8px 14px;
      font-size: 0.9rem;
    }

    .today-btn {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(53, 82, 74, 0.3);
    }

    .weekdays {
      display: grid;
      grid-template-columns: repeat(7, 1fr) 26px;
      gap: 6px;
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #879182;
      text-align: center;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr) 26px;
      gap: 6px;
    }

    .cell {
      position: relative;
      aspect-ratio: 1;
      border-radius: 14px;
      background: white;
      border: 1px solid rgba(53, 82, 74, 0.1);
      display: grid;
      place-items: center;
      padding: 0;
    }

    .cell .num {
      position: absolute;
      top: 4px;
      left: 7px;
      font-size: 0.7rem;
      font-weight: 500;
      color: #879182;
    }

    .cell .tag {
      font-size: 1.35rem;
      line-height: 1;
    }

    .cell.muted {
      opacity: 0.45;
    }

    .cell.today {
      outline: 2px solid var(--accent);
      outline-offset: -2px;
    }

    .cell.selected {
      background: #e8f3e2;
      border-color: var(--accent);
    }

    .badge {
      display: grid;
      place-items: center;
      font-size: 0.95rem;
      color: var(--accent);
    }

    .badge.bad {
      color: #c63b2b;
    }

    .picker-area {
      display: grid;
      gap: 10px;
      background: white;
      border-radius: 18px;
      border: 1px solid rgba(53, 82, 74, 0.08);
      padding: 16px;
    }

    .picker-head {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    .picker-head .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #879182;
    }

    .selected-day {
      font-weight: 600;
      color: var(--accent-2);
    }

    .picker {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tag-btn {
      font-size: 1.4rem;
      background: #f4f8f1;
      border: 1px solid rgba(53, 82, 74, 0.12);
      border-radius: 14px;
      padding: 10px 14px;
    }

    .tag-btn:hover {
      box-shadow: 0 8px 16px rgba(53, 82, 74, 0.12);
    }

    .clear-btn {
      font-size: 0.9rem;
      background: transparent;
      color: #6b645d;
      border: 1px dashed rgba(53, 82, 74, 0.25);
      border-radius: 14px;
      padding: 10px 14px;
    }

    .sidebar {
      display: grid;
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(53, 82, 74, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #879182;
    }

    .stat .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .categories {
      display: grid;
      gap: 12px;
    }

    .category {
      background: white;
      border-radius: 18px;
      padding: 16px 18px;
      border: 1px solid rgba(53, 82, 74, 0.08);
      display: grid;
      gap: 6px;
    }

    .category-head {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
    }

    .category-head .name {
      font-weight: 600;
      text-transform: capitalize;
      color: var(--accent-2);
    }

    .category-head .pct {
      font-size: 1.2rem;
      font-weight: 600;
      color: var(--accent);
    }

    .category-row {
      display: flex;
      justify-content: space-between;
      font-size: 0.9rem;
      color: #6b645d;
    }

    .donut-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(53, 82, 74, 0.08);
      display: grid;
      gap: 8px;
      justify-items: center;
    }

    #donut {
      width: 140px;
      height: 140px;
      display: block;
    }

    .donut-track {
      fill: none;
      stroke: rgba(53, 82, 74, 0.1);
      stroke-width: 12;
    }

    .donut-good {
      fill: none;
      stroke: var(--accent);
      stroke-width: 12;
      stroke-linecap: round;
    }

    .donut-bad {
      fill: none;
      stroke: #c63b2b;
      stroke-width: 12;
      stroke-linecap: round;
    }

    .donut-mood {
      font-size: 26px;
    }

    .donut-pct {
      font-size: 10px;
      fill: #7a746d;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 760px) {
      .app {
        padding: 28px 22px;
      }
      .layout {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Emoji Calendar</h1>
      <p class="subtitle">Tag each day with what you ate, then watch the streaks and weekly stars build.</p>
    </header>

    <div class="layout">
      <section class="calendar">
        <div class="calendar-head">
          <div class="nav">
            <button id="prev" type="button" aria-label="Previous month">&#9664;</button>
            <button id="next" type="button" aria-label="Next month">&#9654;</button>
          </div>
          <h2 id="title"></h2>
          <button id="today-btn" class="today-btn" type="button">Today</button>
        </div>
        <div class="weekdays">
          <span>Sun</span><span>Mon</span><span>Tue</span><span>Wed</span><span>Thu</span><span>Fri</span><span>Sat</span><span></span>
        </div>
        <div class="grid" id="grid"></div>
        <section class="picker-area">
          <div class="picker-head">
            <span class="label">Tag day</span>
            <span id="selected" class="selected-day"></span>
          </div>
          <div class="picker" id="picker"></div>
        </section>
      </section>

      <aside class="sidebar">
        <div class="stat">
          <span class="label">Logged this month</span>
          <span id="logged" class="value">0</span>
        </div>
        <div class="categories" id="categories"></div>
        <div class="donut-card">
          <svg id="donut" viewBox="0 0 120 120" aria-label="Healthy share" role="img"></svg>
          <p class="hint">All-time healthy share.</p>
        </div>
      </aside>
    </div>

    <div class="status" id="status"></div>
    <p class="hint">Days are keyed by calendar date (server time). A week earns its star when all seven days carry a healthy tag.</p>
  </main>

  <script id="bootstrap" type="application/json">{{BOOTSTRAP}}</script>
  <script>
    const bootstrap = JSON.parse(document.getElementById('bootstrap').textContent);
    const titleEl = document.getElementById('title');
    const gridEl = document.getElementById('grid');
    const pickerEl = document.getElementById('picker');
    const selectedEl = document.getElementById('selected');
    const loggedEl = document.getElementById('logged');
    const categoriesEl = document.getElementById('categories');
    const donutEl = document.getElementById('donut');
    const statusEl = document.getElementById('status');

    let view = { year: bootstrap.year, month: bootstrap.month };
    let monthData = null;
    let selectedKey = bootstrap.today;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderCalendar = (data) => {
      titleEl.textContent = `${data.month_name} ${data.year}`;
      const rows = [];
      for (let week = 0; week < 6; week += 1) {
        const cells = data.days.slice(week * 7, week * 7 + 7).map((day) => {
          const classes = ['cell'];
          if (!day.in_current_month) {
            classes.push('muted');
          }
          if (day.key === bootstrap.today) {
            classes.push('today');
          }
          if (day.key === selectedKey) {
            classes.push('selected');
          }
          const tag = day.tag ? `<span class="tag">${day.tag}</span>` : '';
          return `<button type="button" class="${classes.join(' ')}" data-key="${day.key}" data-year="${day.year}" data-month="${day.month}" data-in-month="${day.in_current_month}"><span class="num">${day.day}</span>${tag}</button>`;
        });
        const flags = (data.weeks[week] || {}).full || {};
        const bad = flags.unhealthy && !flags.healthy;
        const mark = flags.healthy ? '&#9733;' : bad ? '&#9679;' : '';
        const note = flags.healthy
          ? 'Every day this week was healthy'
          : bad
            ? 'Every day this week was unhealthy'
            : '';
        cells.push(`<span class="badge${bad ? ' bad' : ''}" title="${note}">${mark}</span>`);
        rows.push(cells.join(''));
      }
      gridEl.innerHTML = rows.join('');
    };

    const renderMonthStats = (stats) => {
      loggedEl.textContent = stats.total;
      categoriesEl.innerHTML = Object.entries(stats.categories)
        .map(([name, cat]) => `
          <div class="category">
            <div class="category-head"><span class="name">${name}</span><span class="pct">${cat.percentage}%</span></div>
            <div class="category-row"><span>Days</span><span>${cat.count}</span></div>
            <div class="category-row"><span>Current streak</span><span>${cat.current_streak}</span></div>
            <div class="category-row"><span>Longest streak</span><span>${cat.longest_streak}</span></div>
          </div>`)
        .join('');
    };

    const renderDonut = (data) => {
      const healthy = data.stats.categories.healthy;
      const unhealthy = data.stats.categories.unhealthy;
      const healthyPct = healthy ? Math.min(healthy.percentage, 100) : 0;
      const unhealthyPct = unhealthy ? Math.min(unhealthy.percentage, 100) : 0;
      const radius = 48;
      const circumference = 2 * Math.PI * radius;
      const healthyLen = (circumference * healthyPct) / 100;
      const unhealthyLen = (circumference * unhealthyPct) / 100;

      const parts = [`<circle class="donut-track" cx="60" cy="60" r="${radius}" />`];
      if (healthyPct > 0) {
        parts.push(
          `<circle class="donut-good" cx="60" cy="60" r="${radius}" stroke-dasharray="${healthyLen.toFixed(2)} ${(circumference - healthyLen).toFixed(2)}" transform="rotate(-90 60 60)" />`
        );
      }
      if (unhealthyPct > 0) {
        parts.push(
          `<circle class="donut-bad" cx="60" cy="60" r="${radius}" stroke-dasharray="${unhealthyLen.toFixed(2)} ${(circumference - unhealthyLen).toFixed(2)}" stroke-dashoffset="${(-healthyLen).toFixed(2)}" transform="rotate(-90 60 60)" />`
        );
      }
      parts.push(`<text class="donut-mood" x="60" y="58" text-anchor="middle">${data.mood}</text>`);
      parts.push(`<text class="donut-pct" x="60" y="82" text-anchor="middle">${healthyPct}% healthy</text>`);
      donutEl.innerHTML = parts.join('');
    };

    const renderPicker = () => {
      const buttons = bootstrap.tags.map(
        (tag) => `<button type="button" class="tag-btn" data-tag="${tag}">${tag}</button>`
      );
      buttons.push('<button type="button" class="clear-btn" data-clear="1">Clear</button>');
      pickerEl.innerHTML = buttons.join('');
    };

    const loadMonth = async (year, month) => {
      const res = await fetch(`/api/month?year=${year}&month=${month}`);
      if (!res.ok) {
        throw new Error('Unable to load month');
      }
      monthData = await res.json();
      view = { year: monthData.year, month: monthData.month };
      renderCalendar(monthData);
      renderMonthStats(monthData.stats);
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      renderDonut(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadMonth(view.year, view.month), loadStats()]);
    };

    const save = async (tag) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/day', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ key: selectedKey, tag })
      });

      if (!res.ok) {
        const body = await res.json().catch(() => null);
        throw new Error((body && body.error) || 'Request failed');
      }

      await refresh();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    gridEl.addEventListener('click', (event) => {
      const cell = event.target.closest('.cell');
      if (!cell) {
        return;
      }
      selectedKey = cell.dataset.key;
      selectedEl.textContent = selectedKey;
      if (cell.dataset.inMonth === 'false') {
        loadMonth(Number(cell.dataset.year), Number(cell.dataset.month)).catch(
          (err) => setStatus(err.message, 'error')
        );
      } else if (monthData) {
        renderCalendar(monthData);
      }
    });

    pickerEl.addEventListener('click', (event) => {
      const button = event.target.closest('button');
      if (!button) {
        return;
      }
      const tag = button.dataset.clear ? null : button.dataset.tag;
      save(tag).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('prev').addEventListener('click', () => {
      loadMonth(view.year, view.month - 1).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next').addEventListener('click', () => {
      loadMonth(view.year, view.month + 1).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('today-btn').addEventListener('click', () => {
      selectedKey = bootstrap.today;
      selectedEl.textContent = selectedKey;
      loadMonth(bootstrap.year, bootstrap.month).catch((err) => setStatus(err.message, 'error'));
    });

    renderPicker();
    selectedEl.textContent = selectedKey;
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
