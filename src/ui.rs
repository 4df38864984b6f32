use crate::models::DashboardSummary;

pub fn render_index(date: &str, summary: &DashboardSummary) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{STREAK}}", &summary.current_streak_days.to_string())
        .replace("{{RATE}}", &summary.completion_rate_percent.to_string())
        .replace("{{HABITS}}", &summary.habits_tracked.to_string())
        .replace("{{GOALS_DONE}}", &summary.goals_achieved_month.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Board</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Sora:wght@600&display=swap');

    :root {
      --bg-1: #eef2ff;
      --bg-2: #c7d2fe;
      --ink: #1e293b;
      --accent: #6366f1;
      --accent-2: #0f172a;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(30, 41, 59, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e0e7ff 60%, #f1f5f9 100%);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
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
      font-family: "Sora", "Segoe UI", sans-serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #64748b;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(15, 23, 42, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #94a3b8;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.highlight {
      color: var(--accent);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
      gap: 16px;
      align-items: start;
    }

    .list-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(15, 23, 42, 0.08);
      display: grid;
      gap: 14px;
    }

    .list-card h2 {
      margin: 0;
      font-size: 1.25rem;
    }

    .entries {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 12px;
    }

    .entry {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 12px;
      border-radius: 14px;
      background: #f8fafc;
      border: 1px solid rgba(15, 23, 42, 0.05);
    }

    .entry-icon {
      width: 40px;
      height: 40px;
      border-radius: 12px;
      display: grid;
      place-items: center;
      font-size: 1.1rem;
      flex-shrink: 0;
    }

    .entry-body {
      flex: 1;
      min-width: 0;
      display: grid;
      gap: 6px;
    }

    .entry-top {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 10px;
    }

    .entry-name {
      font-weight: 600;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .entry-count {
      font-size: 0.85rem;
      color: #64748b;
      white-space: nowrap;
    }

    .entry-meta {
      font-size: 0.82rem;
      color: #64748b;
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: rgba(15, 23, 42, 0.08);
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .entry-actions {
      display: flex;
      gap: 6px;
      flex-shrink: 0;
    }

    .icon-btn {
      appearance: none;
      border: 1px solid rgba(15, 23, 42, 0.12);
      background: white;
      border-radius: 10px;
      width: 32px;
      height: 32px;
      font-size: 1rem;
      font-weight: 600;
      color: var(--accent-2);
      cursor: pointer;
      display: grid;
      place-items: center;
      transition: transform 120ms ease, background 120ms ease;
    }

    .icon-btn:active {
      transform: scale(0.94);
    }

    .icon-btn.done {
      background: #dcfce7;
      border-color: #86efac;
      color: #15803d;
    }

    .icon-btn.danger {
      color: #b91c1c;
    }

    .badge {
      font-size: 0.75rem;
      font-weight: 600;
      padding: 3px 10px;
      border-radius: 999px;
      white-space: nowrap;
    }

    .badge.on-track {
      background: #dcfce7;
      color: #15803d;
    }

    .badge.at-risk {
      background: #fef3c7;
      color: #b45309;
    }

    .badge.behind {
      background: #fee2e2;
      color: #b91c1c;
    }

    .entry-form {
      display: grid;
      grid-template-columns: 2fr 1fr 1fr 1fr auto;
      gap: 8px;
    }

    .entry-form input,
    .entry-form select {
      border: 1px solid rgba(15, 23, 42, 0.15);
      border-radius: 10px;
      padding: 9px 10px;
      font: inherit;
      font-size: 0.9rem;
      min-width: 0;
    }

    button.submit {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 9px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(99, 102, 241, 0.3);
      transition: transform 150ms ease;
    }

    button.submit:active {
      transform: scale(0.97);
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .chart-header .subtitle {
      margin-top: 6px;
      font-size: 0.95rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(15, 23, 42, 0.08);
      border-radius: 999px;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #64748b;
      cursor: pointer;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(15, 23, 42, 0.12);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(15, 23, 42, 0.08);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Inter", "Segoe UI", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-line.series-sleep,
    .chart-point.series-sleep {
      stroke: #8b5cf6;
    }

    .chart-line.series-water,
    .chart-point.series-water {
      stroke: #3b82f6;
    }

    .chart-line.series-screen,
    .chart-point.series-screen {
      stroke: #f59e0b;
    }

    .chart-grid {
      stroke: rgba(15, 23, 42, 0.12);
    }

    .chart-label {
      fill: #94a3b8;
      font-size: 11px;
    }

    .chart-metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      min-height: 1.2em;
    }

    .legend-chip {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      font-size: 0.85rem;
      color: #64748b;
    }

    .dot {
      width: 10px;
      height: 10px;
      border-radius: 50%;
      display: inline-block;
      background: var(--accent);
    }

    .dot.series-sleep {
      background: #8b5cf6;
    }

    .dot.series-water {
      background: #3b82f6;
    }

    .dot.series-screen {
      background: #f59e0b;
    }

    .calendar-area {
      display: grid;
      gap: 14px;
    }

    .calendar-area h2 {
      margin: 0;
      font-size: 1.25rem;
    }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
    }

    .cal-day {
      aspect-ratio: 1;
      display: grid;
      place-items: center;
      border-radius: 12px;
      background: rgba(15, 23, 42, 0.05);
      font-size: 0.85rem;
      color: #475569;
    }

    .cal-day.done {
      background: #10b981;
      color: white;
      font-weight: 600;
    }

    .cal-day.partial {
      background: #fcd34d;
      color: #78350f;
      font-weight: 600;
    }

    .status {
      font-size: 0.95rem;
      color: #64748b;
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
      color: #64748b;
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

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
      .entry-form {
        grid-template-columns: 1fr 1fr;
      }
      .entry-form input[name="name"] {
        grid-column: 1 / -1;
      }
      button.submit {
        grid-column: 1 / -1;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Board</h1>
      <p class="subtitle">{{DATE}} · small steps, steady progress.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Current streak</span>
        <span id="streak" class="value highlight">{{STREAK}} days</span>
      </div>
      <div class="stat">
        <span class="label">Completion rate</span>
        <span id="rate" class="value">{{RATE}}%</span>
      </div>
      <div class="stat">
        <span class="label">Habits tracked</span>
        <span id="habit-count" class="value">{{HABITS}}</span>
      </div>
      <div class="stat">
        <span class="label">Goals achieved</span>
        <span id="goals-done" class="value">{{GOALS_DONE}}</span>
      </div>
    </section>

    <section class="columns">
      <div class="list-card">
        <h2>Today's habits</h2>
        <ul id="habit-list" class="entries"></ul>
        <form id="habit-form" class="entry-form">
          <input id="habit-name" name="name" placeholder="New habit" required />
          <select id="habit-category" name="category">
            <option value="water">Water</option>
            <option value="sleep">Sleep</option>
            <option value="screen">Screen</option>
            <option value="exercise">Exercise</option>
            <option value="reading">Reading</option>
            <option value="coffee">Coffee</option>
            <option value="health">Health</option>
            <option value="other">Other</option>
          </select>
          <input id="habit-target" name="target" type="number" min="0.5" step="0.5" value="1" required />
          <select id="habit-unit" name="unit">
            <option value="glasses">glasses</option>
            <option value="hours">hours</option>
            <option value="minutes">minutes</option>
            <option value="times">times</option>
            <option value="steps">steps</option>
          </select>
          <button class="submit" type="submit">Add habit</button>
        </form>
      </div>

      <div class="list-card">
        <h2>Goals</h2>
        <ul id="goal-list" class="entries"></ul>
        <form id="goal-form" class="entry-form">
          <input id="goal-name" name="name" placeholder="New goal" required />
          <input id="goal-target" name="target" type="number" min="1" step="1" value="30" required />
          <select id="goal-unit" name="unit">
            <option value="days">days</option>
            <option value="books">books</option>
            <option value="kg">kg</option>
            <option value="hours">hours</option>
            <option value="times">times</option>
          </select>
          <input id="goal-days" name="days_left" type="number" min="0" step="1" value="30" required />
          <button class="submit" type="submit">Add goal</button>
        </form>
      </div>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <div>
          <h2 id="chart-title">Weekly progress</h2>
          <p id="chart-subtitle" class="subtitle">Habits completed each day.</p>
        </div>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-tab="weekly" role="tab" aria-selected="true">Weekly progress</button>
          <button class="tab" type="button" data-tab="trends" role="tab" aria-selected="false">Trends</button>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Stats chart" role="img"></svg>
      </div>
      <div id="chart-legend" class="legend"></div>
      <div class="chart-metrics">
        <div class="stat">
          <span class="label" id="metric-1-label">Best day</span>
          <span class="value" id="metric-1-value">0</span>
        </div>
        <div class="stat">
          <span class="label" id="metric-2-label">Completed this week</span>
          <span class="value" id="metric-2-value">0</span>
        </div>
        <div class="stat">
          <span class="label" id="metric-3-label">Week completion %</span>
          <span class="value highlight" id="metric-3-value">0</span>
        </div>
      </div>
    </section>

    <section class="calendar-area">
      <h2 id="calendar-title">This month</h2>
      <div id="calendar" class="calendar-grid"></div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Everything lives in memory and resets on restart. Weekly, trend and calendar series show recent history.</p>
  </main>

  <script>
    const streakEl = document.getElementById('streak');
    const rateEl = document.getElementById('rate');
    const habitCountEl = document.getElementById('habit-count');
    const goalsDoneEl = document.getElementById('goals-done');
    const habitListEl = document.getElementById('habit-list');
    const goalListEl = document.getElementById('goal-list');
    const habitForm = document.getElementById('habit-form');
    const goalForm = document.getElementById('goal-form');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const chartSubtitleEl = document.getElementById('chart-subtitle');
    const chartLegendEl = document.getElementById('chart-legend');
    const calendarTitleEl = document.getElementById('calendar-title');
    const calendarEl = document.getElementById('calendar');
    const metric1Label = document.getElementById('metric-1-label');
    const metric1Value = document.getElementById('metric-1-value');
    const metric2Label = document.getElementById('metric-2-label');
    const metric2Value = document.getElementById('metric-2-value');
    const metric3Label = document.getElementById('metric-3-label');
    const metric3Value = document.getElementById('metric-3-value');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const CATEGORY_COLORS = {
      water: '#3b82f6',
      sleep: '#8b5cf6',
      screen: '#f59e0b',
      exercise: '#10b981',
      reading: '#6366f1',
      coffee: '#a16207',
      health: '#ef4444',
      other: '#9ca3af'
    };

    const CATEGORY_ICONS = {
      water: '💧',
      sleep: '😴',
      screen: '📱',
      exercise: '🏃',
      reading: '📖',
      coffee: '☕',
      health: '❤️',
      other: '⭐'
    };

    const STATUS_LABELS = {
      'on-track': 'On track',
      'at-risk': 'At risk',
      'behind': 'Behind'
    };

    let statsData = null;
    let activeTab = 'weekly';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const esc = (value) => String(value)
      .replaceAll('&', '&amp;')
      .replaceAll('<', '&lt;')
      .replaceAll('>', '&gt;')
      .replaceAll('"', '&quot;');

    const formatMetric = (value, decimals = 0) => {
      if (typeof value !== 'number' || Number.isNaN(value)) {
        return '--';
      }
      const factor = Math.pow(10, decimals);
      const rounded = Math.round(value * factor) / factor;
      if (decimals === 0) {
        return Math.round(rounded).toString();
      }
      return rounded.toFixed(decimals).replace(/\.0+$/, '');
    };

    const formatAxisValue = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const renderHabits = (habits) => {
      if (!habits.length) {
        habitListEl.innerHTML = '<li class="entry-meta">No habits yet. Add one below.</li>';
        return;
      }
      habitListEl.innerHTML = habits
        .map((habit) => {
          const color = CATEGORY_COLORS[habit.category] || CATEGORY_COLORS.other;
          const icon = CATEGORY_ICONS[habit.category] || CATEGORY_ICONS.other;
          return `
            <li class="entry">
              <span class="entry-icon" style="background: ${color}22">${icon}</span>
              <div class="entry-body">
                <div class="entry-top">
                  <span class="entry-name">${esc(habit.name)}</span>
                  <span class="entry-count">${formatMetric(habit.current, 1)} / ${formatMetric(habit.target, 1)} ${esc(habit.unit)}</span>
                </div>
                <div class="bar"><div class="bar-fill" style="width: ${habit.progress_percent}%; background: ${color}"></div></div>
              </div>
              <div class="entry-actions">
                <button class="icon-btn" type="button" data-action="increment" data-id="${habit.id}" title="Log ${esc(habit.unit)}">+</button>
                <button class="icon-btn${habit.completed ? ' done' : ''}" type="button" data-action="toggle" data-id="${habit.id}" title="Toggle done">✓</button>
                <button class="icon-btn danger" type="button" data-action="remove" data-id="${habit.id}" title="Delete">×</button>
              </div>
            </li>
          `;
        })
        .join('');
    };

    const renderGoals = (goals) => {
      if (!goals.length) {
        goalListEl.innerHTML = '<li class="entry-meta">No goals yet. Add one below.</li>';
        return;
      }
      goalListEl.innerHTML = goals
        .map((goal) => {
          const linked = goal.linked_habit_ids.length
            ? ` · ${goal.linked_habit_ids.length} linked`
            : '';
          return `
            <li class="entry">
              <div class="entry-body">
                <div class="entry-top">
                  <span class="entry-name">${esc(goal.name)}</span>
                  <span class="badge ${goal.status}">${STATUS_LABELS[goal.status] || goal.status}</span>
                </div>
                <div class="bar"><div class="bar-fill" style="width: ${goal.progress}%"></div></div>
                <div class="entry-meta">${formatMetric(goal.progress)}% complete · ${goal.days_left} days left${linked}</div>
              </div>
              <div class="entry-actions">
                <button class="icon-btn danger" type="button" data-action="remove-goal" data-id="${goal.id}" title="Delete">×</button>
              </div>
            </li>
          `;
        })
        .join('');
    };

    const renderLineChart = (labels, series) => {
      const values = series.flatMap((line) => line.values);
      if (!values.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      let min = Math.min(...values);
      let max = Math.max(...values);
      min = Math.min(min, 0);
      max = Math.max(max, 0);
      if (min === max) {
        min -= 1;
        max += 1;
      }

      const range = max - min;
      const xStep = labels.length > 1 ? (width - paddingX * 2) / (labels.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatAxisValue(value)}</text>`;
      }

      const labelEvery = labels.length > 8 ? 2 : 1;
      const xLabels = labels
        .map((label, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${label}</text>`;
        })
        .join('');

      const lines = series
        .map((line) => {
          const path = line.values
            .map((value, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(value).toFixed(2)}`)
            .join(' ');
          const circles = line.values
            .map((value, index) => `<circle class="chart-point ${line.css}" cx="${x(index)}" cy="${y(value)}" r="4" />`)
            .join('');
          return `<path class="chart-line ${line.css}" d="${path}" />${circles}`;
        })
        .join('');

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `
        ${grid}
        ${lines}
        ${xLabels}
      `;
    };

    const setMetrics = (items) => {
      const [first, second, third] = items;
      metric1Label.textContent = first.label;
      metric1Value.textContent = formatMetric(first.value, first.decimals || 0);
      metric2Label.textContent = second.label;
      metric2Value.textContent = formatMetric(second.value, second.decimals || 0);
      metric3Label.textContent = third.label;
      metric3Value.textContent = formatMetric(third.value, third.decimals || 0);
    };

    const renderWeekly = () => {
      const week = statsData.weekly_progress;
      const labels = week.map((point) => point.day);
      const completed = week.map((point) => point.completed);
      const totalDone = completed.reduce((sum, value) => sum + value, 0);
      const totalPossible = week.reduce((sum, point) => sum + point.total, 0);
      chartTitleEl.textContent = 'Weekly progress';
      chartSubtitleEl.textContent = `Habits completed each day (out of ${week[0] ? week[0].total : 0}).`;
      chartLegendEl.innerHTML = '';
      renderLineChart(labels, [{ css: '', values: completed }]);
      setMetrics([
        { label: 'Best day', value: Math.max(...completed) },
        { label: 'Completed this week', value: totalDone },
        { label: 'Week completion %', value: totalPossible ? (totalDone / totalPossible) * 100 : 0 }
      ]);
    };

    const renderTrends = () => {
      const weeks = statsData.trend_weeks;
      const labels = weeks.map((point) => point.week.replace('Week ', 'W'));
      const latest = weeks[weeks.length - 1];
      chartTitleEl.textContent = 'Trends';
      chartSubtitleEl.textContent = 'Sleep, water and screen averages per week.';
      chartLegendEl.innerHTML = `
        <span class="legend-chip"><span class="dot series-sleep"></span>Sleep (hours)</span>
        <span class="legend-chip"><span class="dot series-water"></span>Water (glasses)</span>
        <span class="legend-chip"><span class="dot series-screen"></span>Screen (hours)</span>
      `;
      renderLineChart(labels, [
        { css: 'series-sleep', values: weeks.map((point) => point.sleep) },
        { css: 'series-water', values: weeks.map((point) => point.water) },
        { css: 'series-screen', values: weeks.map((point) => point.screen) }
      ]);
      setMetrics([
        { label: 'Latest sleep', value: latest ? latest.sleep : NaN, decimals: 1 },
        { label: 'Latest water', value: latest ? latest.water : NaN, decimals: 1 },
        { label: 'Latest screen', value: latest ? latest.screen : NaN, decimals: 1 }
      ]);
    };

    const renderActiveTab = () => {
      if (!statsData) {
        return;
      }
      if (activeTab === 'trends') {
        renderTrends();
      } else {
        renderWeekly();
      }
    };

    const setActiveTab = (tab) => {
      activeTab = tab;
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      renderActiveTab();
    };

    const renderCalendar = (calendar) => {
      calendarTitleEl.textContent = calendar.month;
      const cells = [];
      for (let day = 1; day <= 31; day += 1) {
        let cls = 'cal-day';
        if (calendar.completed.includes(day)) {
          cls += ' done';
        } else if (calendar.partial.includes(day)) {
          cls += ' partial';
        }
        cells.push(`<span class="${cls}">${day}</span>`);
      }
      calendarEl.innerHTML = cells.join('');
    };

    const updateSummary = (summary) => {
      streakEl.textContent = `${summary.current_streak_days} days`;
      rateEl.textContent = `${summary.completion_rate_percent}%`;
      habitCountEl.textContent = summary.habits_tracked;
      goalsDoneEl.textContent = summary.goals_achieved_month;
    };

    const loadHabits = async () => {
      const res = await fetch('/api/habits');
      if (!res.ok) {
        throw new Error('Unable to load habits');
      }
      renderHabits(await res.json());
    };

    const loadGoals = async () => {
      const res = await fetch('/api/goals');
      if (!res.ok) {
        throw new Error('Unable to load goals');
      }
      renderGoals(await res.json());
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      statsData = await res.json();
      updateSummary(statsData.summary);
      renderActiveTab();
      renderCalendar(statsData.calendar);
    };

    const refresh = async () => {
      await Promise.all([loadHabits(), loadGoals(), loadStats()]);
    };

    const send = async (url, options) => {
      setStatus('Saving...', 'info');
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
      return res;
    };

    const postJson = (url, payload) =>
      send(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });

    habitListEl.addEventListener('click', (event) => {
      const button = event.target.closest('[data-action]');
      if (!button) {
        return;
      }
      const { action, id } = button.dataset;
      const run = async () => {
        if (action === 'increment') {
          await send(`/api/habits/${id}/increment`, { method: 'POST' });
        } else if (action === 'toggle') {
          await send(`/api/habits/${id}/toggle`, { method: 'POST' });
        } else if (action === 'remove') {
          await send(`/api/habits/${id}`, { method: 'DELETE' });
        }
        await refresh();
      };
      run().catch((err) => setStatus(err.message, 'error'));
    });

    goalListEl.addEventListener('click', (event) => {
      const button = event.target.closest('[data-action="remove-goal"]');
      if (!button) {
        return;
      }
      const run = async () => {
        await send(`/api/goals/${button.dataset.id}`, { method: 'DELETE' });
        await Promise.all([loadGoals(), loadStats()]);
      };
      run().catch((err) => setStatus(err.message, 'error'));
    });

    habitForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        name: document.getElementById('habit-name').value,
        category: document.getElementById('habit-category').value,
        target: Number(document.getElementById('habit-target').value),
        unit: document.getElementById('habit-unit').value
      };
      const run = async () => {
        await postJson('/api/habits', payload);
        habitForm.reset();
        await Promise.all([loadHabits(), loadStats()]);
      };
      run().catch((err) => setStatus(err.message, 'error'));
    });

    goalForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        name: document.getElementById('goal-name').value,
        target: Number(document.getElementById('goal-target').value),
        unit: document.getElementById('goal-unit').value,
        days_left: Number(document.getElementById('goal-days').value)
      };
      const run = async () => {
        await postJson('/api/goals', payload);
        goalForm.reset();
        await Promise.all([loadGoals(), loadStats()]);
      };
      run().catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
