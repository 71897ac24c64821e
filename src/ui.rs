use crate::models::{ClockReading, Notice, ProgressSnapshot};

pub fn render_index(
    clock: &ClockReading,
    progress: &ProgressSnapshot,
    flash: &[Notice],
) -> String {
    // Notices land inside a <script>; a literal "</" would close it early.
    let flash = serde_json::to_string(flash)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");
    INDEX_HTML
        .replace("{{TIME}}", &clock.time)
        .replace("{{DATE}}", &clock.date)
        .replace("{{WEEKDAY}}", &clock.weekday)
        .replace("{{TIMEZONE}}", &clock.timezone)
        .replace("{{COMPLETED}}", &progress.completed.to_string())
        .replace("{{TOTAL}}", &progress.total.to_string())
        .replace("{{FLASH}}", &flash)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Tasks</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #1f2233;
      --bg-2: #2e3350;
      --ink: #f4f1ea;
      --muted: #a9a7b8;
      --card: rgba(255, 255, 255, 0.06);
      --green: #3fb27f;
      --red: #e0574f;
      --gold: #ffbd00;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.35);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #272b42 60%, #1b1d2b 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      grid-template-columns: minmax(0, 1.6fr) minmax(0, 1fr);
      gap: 24px;
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 20px;
      align-content: start;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .progress-row {
      display: flex;
      align-items: center;
      gap: 16px;
    }

    .progress-track {
      flex: 1;
      height: 10px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.12);
      overflow: hidden;
    }

    #progress {
      height: 100%;
      width: 0;
      background: var(--gold);
      transition: width 250ms ease;
    }

    #progress.completed {
      background: var(--green);
    }

    #numbers {
      font-weight: 600;
      min-width: 64px;
      text-align: right;
    }

    form.add {
      display: flex;
      gap: 10px;
    }

    input[type="text"] {
      flex: 1;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      color: var(--ink);
      background: rgba(255, 255, 255, 0.1);
      outline: none;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--gold);
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    button:disabled {
      opacity: 0.5;
      pointer-events: none;
    }

    #task-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    #task-list li {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 10px 14px;
      border-radius: 16px;
      background: rgba(255, 255, 255, 0.08);
    }

    #task-list li.completed span {
      opacity: 0.7;
      text-decoration: line-through;
    }

    #task-list li span {
      flex: 1;
      word-break: break-word;
    }

    .task-buttons {
      display: flex;
      gap: 6px;
    }

    .task-buttons button {
      padding: 6px 12px;
      font-size: 0.85rem;
      background: rgba(255, 255, 255, 0.14);
    }

    .task-buttons .delete-btn {
      background: var(--red);
    }

    .empty-image {
      text-align: center;
      color: var(--muted);
      padding: 24px 0;
    }

    #save-progress-btn {
      background: var(--green);
    }

    .clock {
      display: grid;
      gap: 4px;
    }

    #clock-time {
      font-size: 2.2rem;
      font-weight: 600;
      letter-spacing: 0.04em;
    }

    .clock .muted {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .calendar-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
    }

    .calendar-header button {
      padding: 6px 12px;
      background: rgba(255, 255, 255, 0.12);
    }

    #clear-calendar-icon {
      background: transparent;
      color: var(--muted);
    }

    .mini-calendar-weekdays,
    .mini-calendar-days {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
      text-align: center;
    }

    .mini-calendar-weekday {
      font-size: 0.75rem;
      color: var(--muted);
    }

    .mini-calendar-day {
      padding: 6px 0;
      border-radius: 10px;
      font-size: 0.85rem;
    }

    .mini-calendar-day.today {
      outline: 2px solid var(--gold);
    }

    .mini-calendar-day.has-progress {
      background: var(--green);
    }

    .mini-calendar-day.sad-progress {
      background: var(--red);
    }

    .notification {
      position: fixed;
      top: 20px;
      right: 20px;
      color: white;
      padding: 15px 25px;
      border-radius: 30px;
      font-weight: 600;
      box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
      z-index: 1000;
      animation: slideIn 0.3s ease;
    }

    .notification.success {
      background: var(--green);
    }

    .notification.warning {
      background: var(--red);
    }

    .notification.leaving {
      animation: slideOut 0.3s ease;
    }

    .star {
      position: fixed;
      pointer-events: none;
      color: var(--gold);
      font-size: 1.4rem;
      animation: burst 900ms ease-out forwards;
    }

    @keyframes slideIn {
      from { transform: translateX(100%); opacity: 0; }
      to { transform: translateX(0); opacity: 1; }
    }

    @keyframes slideOut {
      from { transform: translateX(0); opacity: 1; }
      to { transform: translateX(100%); opacity: 0; }
    }

    @keyframes burst {
      from { transform: translate(0, 0) scale(1); opacity: 1; }
      to { transform: translate(var(--dx), var(--dy)) scale(0.4); opacity: 0; }
    }

    @media (max-width: 760px) {
      .app {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <section class="card">
      <h1>Today's Tasks</h1>

      <div class="progress-row">
        <div class="progress-track"><div id="progress"></div></div>
        <span id="numbers">{{COMPLETED}} / {{TOTAL}}</span>
      </div>

      <form class="add" id="add-form" method="post" action="/tasks">
        <input type="text" id="task-input" name="text" placeholder="What needs doing today?" autocomplete="off" />
        <button type="submit" id="add-task-btn">Add</button>
      </form>

      <ul id="task-list"></ul>
      <div class="empty-image">Nothing on the list yet.</div>

      <form id="close-form" method="post" action="/day/close">
        <button type="submit" id="save-progress-btn">Save today's progress</button>
      </form>
    </section>

    <aside class="card">
      <div class="clock">
        <span id="clock-time">{{TIME}}</span>
        <span id="clock-day">{{WEEKDAY}}</span>
        <span id="clock-date" class="muted">{{DATE}}</span>
        <span id="clock-timezone" class="muted">{{TIMEZONE}}</span>
      </div>

      <div>
        <div class="calendar-header">
          <button type="button" id="prev-month" aria-label="Previous month">&lsaquo;</button>
          <strong id="current-month"></strong>
          <button type="button" id="next-month" aria-label="Next month">&rsaquo;</button>
          <button type="button" id="clear-calendar-icon" title="Clear calendar data">Clear</button>
        </div>
        <div id="mini-calendar"></div>
      </div>
    </aside>
  </main>

  <script>
    const taskInput = document.getElementById('task-input');
    const taskList = document.getElementById('task-list');
    const emptyImage = document.querySelector('.empty-image');
    const progressBar = document.getElementById('progress');
    const progressNumbers = document.getElementById('numbers');
    const calendarEl = document.getElementById('mini-calendar');
    const monthEl = document.getElementById('current-month');

    const pad = (value) => String(value).padStart(2, '0');

    const showNotification = (message, severity) => {
      const notification = document.createElement('div');
      notification.className = `notification ${severity}`;
      notification.textContent = message;
      document.body.appendChild(notification);
      setTimeout(() => {
        notification.classList.add('leaving');
        setTimeout(() => notification.remove(), 300);
      }, 3000);
    };

    const celebrate = () => {
      const rect = progressBar.getBoundingClientRect();
      for (let i = 0; i < 24; i += 1) {
        const star = document.createElement('span');
        const angle = (Math.PI * 2 * i) / 24;
        star.className = 'star';
        star.textContent = '★';
        star.style.left = `${rect.right}px`;
        star.style.top = `${rect.top}px`;
        star.style.setProperty('--dx', `${Math.cos(angle) * 120}px`);
        star.style.setProperty('--dy', `${Math.sin(angle) * 120}px`);
        document.body.appendChild(star);
        setTimeout(() => star.remove(), 900);
      }
    };

    const send = async (command) => {
      const res = await fetch('/api/command', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(command)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      const data = await res.json();
      render(data.state);
      data.notices.forEach((notice) => showNotification(notice.message, notice.severity));
      if (data.celebrate) {
        celebrate();
      }
    };

    const report = (err) => showNotification(err.message, 'warning');

    const startEdit = (li, span, index) => {
      const input = document.createElement('input');
      input.type = 'text';
      input.className = 'edit-input';
      input.value = span.textContent;
      span.replaceWith(input);
      input.focus();
      input.select();

      let done = false;
      const finish = () => {
        if (done) {
          return;
        }
        done = true;
        send({ type: 'edit_task', index, text: input.value }).catch(report);
      };
      input.addEventListener('keydown', (event) => {
        if (event.key === 'Enter') {
          event.preventDefault();
          finish();
        }
      });
      input.addEventListener('blur', finish);
    };

    const renderTasks = (tasks) => {
      taskList.replaceChildren();
      tasks.forEach((task, index) => {
        const li = document.createElement('li');
        li.classList.toggle('completed', task.completed);

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.className = 'checkbox';
        checkbox.checked = task.completed;
        checkbox.addEventListener('change', () => send({ type: 'toggle_task', index }).catch(report));

        const span = document.createElement('span');
        span.textContent = task.text;

        const buttons = document.createElement('div');
        buttons.className = 'task-buttons';

        const editBtn = document.createElement('button');
        editBtn.type = 'button';
        editBtn.className = 'edit-btn';
        editBtn.textContent = 'Edit';
        editBtn.disabled = task.completed;
        editBtn.addEventListener('click', () => startEdit(li, span, index));

        const deleteBtn = document.createElement('button');
        deleteBtn.type = 'button';
        deleteBtn.className = 'delete-btn';
        deleteBtn.textContent = 'Delete';
        deleteBtn.addEventListener('click', () => send({ type: 'delete_task', index }).catch(report));

        buttons.append(editBtn, deleteBtn);
        li.append(checkbox, span, buttons);
        taskList.appendChild(li);
      });
      emptyImage.style.display = tasks.length === 0 ? 'block' : 'none';
    };

    const renderProgress = (state) => {
      progressBar.style.width = `${state.percent}%`;
      progressBar.classList.toggle('completed', state.all_done);
      progressNumbers.textContent = `${state.progress.completed} / ${state.progress.total}`;
    };

    const renderCalendar = (calendar) => {
      monthEl.textContent = calendar.title;
      const weekdays = document.createElement('div');
      weekdays.className = 'mini-calendar-weekdays';
      calendar.weekdays.forEach((label) => {
        const cell = document.createElement('div');
        cell.className = 'mini-calendar-weekday';
        cell.textContent = label;
        weekdays.appendChild(cell);
      });

      const days = document.createElement('div');
      days.className = 'mini-calendar-days';
      calendar.cells.forEach((cell) => {
        const el = document.createElement('div');
        el.className = 'mini-calendar-day';
        if (cell.kind === 'blank') {
          el.classList.add('other-month');
        } else {
          el.textContent = cell.day;
          el.classList.toggle('today', cell.today);
          el.classList.toggle('has-progress', cell.status === 'completed');
          el.classList.toggle('sad-progress', cell.status === 'partial');
        }
        days.appendChild(el);
      });

      calendarEl.replaceChildren(weekdays, days);
    };

    const render = (state) => {
      renderTasks(state.tasks);
      renderProgress(state);
      renderCalendar(state.calendar);
    };

    const updateClock = () => {
      const now = new Date();
      document.getElementById('clock-time').textContent =
        `${pad(now.getHours())}:${pad(now.getMinutes())}:${pad(now.getSeconds())}`;
      document.getElementById('clock-date').textContent =
        now.toLocaleDateString('en-US', { year: 'numeric', month: 'long', day: 'numeric' });
      document.getElementById('clock-day').textContent =
        now.toLocaleDateString('en-US', { weekday: 'long' });
      document.getElementById('clock-timezone').textContent =
        `Local (${Intl.DateTimeFormat().resolvedOptions().timeZone})`;
    };

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const text = taskInput.value;
      taskInput.value = '';
      send({ type: 'add_task', text }).catch(report);
    });

    document.getElementById('close-form').addEventListener('submit', (event) => {
      event.preventDefault();
      send({ type: 'close_day' }).catch(report);
    });

    document.getElementById('prev-month').addEventListener('click', () => {
      send({ type: 'prev_month' }).catch(report);
    });

    document.getElementById('next-month').addEventListener('click', () => {
      send({ type: 'next_month' }).catch(report);
    });

    document.getElementById('clear-calendar-icon').addEventListener('click', () => {
      if (confirm('Are you sure you want to clear all calendar progress data?')) {
        send({ type: 'reset_calendar', confirmed: true }).catch(report);
      }
    });

    const load = async () => {
      const res = await fetch('/api/state');
      if (!res.ok) {
        throw new Error('Unable to load tasks');
      }
      render(await res.json());
    };

    const flash = {{FLASH}};
    flash.forEach((notice) => showNotification(notice.message, notice.severity));

    updateClock();
    setInterval(updateClock, 1000);
    load().catch(report);
  </script>
</body>
</html>
"#;
