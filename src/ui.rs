pub fn render_index() -> String {
    INDEX_HTML.to_string()
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Progress Tracker</title>
  <style>
    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: #ffffff;
      color: #000000;
      font-family: ui-sans-serif, system-ui, "Helvetica Neue", Arial, sans-serif;
    }

    header {
      position: sticky;
      top: 0;
      z-index: 10;
      background: rgba(255, 255, 255, 0.85);
      backdrop-filter: blur(6px);
      border-bottom: 1px solid #e5e7eb;
      padding: 16px 24px;
    }

    .header-inner {
      max-width: 960px;
      margin: 0 auto;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .header-inner h1 {
      margin: 0;
      font-size: 1.6rem;
      font-weight: 700;
    }

    .tagline {
      margin: 4px 0 0;
      color: #6b7280;
      font-size: 0.85rem;
    }

    .greeting {
      margin: 0;
      font-size: 1.05rem;
      font-weight: 500;
    }

    main {
      max-width: 960px;
      margin: 0 auto;
      padding: 24px 16px 220px;
    }

    .empty {
      text-align: center;
      padding: 80px 0;
    }

    .empty .headline {
      color: #4b5563;
      font-size: 1.1rem;
      margin: 0 0 6px;
    }

    .empty .hint {
      color: #9ca3af;
      margin: 0;
    }

    .day-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
      gap: 24px;
    }

    .day-card {
      background: rgba(255, 251, 235, 0.5);
      border: 1px solid #fde68a;
      border-radius: 10px;
      padding: 16px;
      box-shadow: 0 8px 20px rgba(15, 23, 42, 0.08);
    }

    .day-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding-bottom: 8px;
      margin-bottom: 12px;
      border-bottom: 2px solid rgba(254, 202, 202, 0.5);
    }

    .day-head h2 {
      margin: 0;
      font-size: 1.05rem;
      font-weight: 700;
      color: #334155;
    }

    .icon-btn {
      appearance: none;
      background: none;
      border: none;
      cursor: pointer;
      color: #f87171;
      border-radius: 999px;
      padding: 4px;
      opacity: 0;
      transition: opacity 150ms ease, color 150ms ease;
    }

    .icon-btn:hover {
      color: #dc2626;
    }

    .day-card:hover .icon-btn,
    .entry:hover .icon-btn,
    .icon-btn:focus {
      opacity: 1;
    }

    .entry {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 10px 0;
      border-bottom: 1px solid rgba(253, 230, 138, 0.5);
    }

    .entry:last-child {
      border-bottom: none;
    }

    .entry-name {
      display: flex;
      align-items: center;
      gap: 8px;
      flex-wrap: wrap;
    }

    .entry-name h3 {
      margin: 0;
      font-size: 0.98rem;
      font-weight: 500;
      color: #334155;
      text-transform: capitalize;
    }

    .badge {
      padding: 2px 8px;
      font-size: 0.7rem;
      font-weight: 600;
      border-radius: 999px;
      border: 1px solid transparent;
    }

    .badge.Push {
      background: #fee2e2;
      color: #991b1b;
      border-color: #fecaca;
    }

    .badge.Pull {
      background: #dcfce7;
      color: #166534;
      border-color: #bbf7d0;
    }

    .badge.Legs {
      background: #dbeafe;
      color: #1e40af;
      border-color: #bfdbfe;
    }

    .entry-stats {
      display: flex;
      align-items: center;
      gap: 14px;
    }

    .entry-stats .numbers {
      text-align: right;
      font-size: 0.85rem;
      color: #475569;
    }

    .entry-stats .weight {
      font-weight: 600;
      color: #1e293b;
      margin-top: 2px;
    }

    form.entry-form {
      position: fixed;
      bottom: 0;
      left: 0;
      right: 0;
      background: rgba(249, 250, 251, 0.92);
      backdrop-filter: blur(6px);
      border-top: 1px solid #e5e7eb;
      padding: 14px 16px 18px;
      box-shadow: 0 -12px 30px rgba(15, 23, 42, 0.12);
    }

    .form-inner {
      max-width: 960px;
      margin: 0 auto;
    }

    .indicator-row {
      display: flex;
      justify-content: flex-end;
      height: 22px;
      margin-bottom: 4px;
    }

    .indicator {
      display: flex;
      align-items: center;
      gap: 6px;
      font-size: 0.85rem;
      font-weight: 500;
      color: #4b5563;
      opacity: 0;
      transition: opacity 300ms ease;
    }

    .indicator.visible {
      opacity: 1;
    }

    .indicator .check {
      color: #16a34a;
      font-weight: 700;
    }

    .spinner {
      width: 14px;
      height: 14px;
      border: 2px solid #d1d5db;
      border-top-color: #4b5563;
      border-radius: 50%;
      animation: spin 800ms linear infinite;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }

    .split-row {
      margin-bottom: 10px;
    }

    .field-label {
      display: block;
      font-size: 0.72rem;
      font-weight: 500;
      color: #6b7280;
      margin-bottom: 4px;
    }

    .split-buttons {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
    }

    .split-btn {
      padding: 8px 16px;
      border-radius: 6px;
      font-size: 0.85rem;
      font-weight: 600;
      cursor: pointer;
      background: #ffffff;
      color: #374151;
      border: 1px solid #d1d5db;
      transition: background 150ms ease, color 150ms ease;
    }

    .split-btn:hover {
      background: #f3f4f6;
    }

    .split-btn.active {
      background: #000000;
      color: #ffffff;
      border-color: #000000;
    }

    .field-grid {
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 12px;
      align-items: end;
    }

    @media (min-width: 768px) {
      .field-grid {
        grid-template-columns: repeat(5, 1fr);
      }
    }

    input {
      width: 100%;
      background: #ffffff;
      color: #000000;
      border: 1px solid #d1d5db;
      border-radius: 6px;
      padding: 9px 10px;
      font-size: 0.9rem;
    }

    input:focus {
      outline: 2px solid #000000;
      outline-offset: 1px;
    }

    .submit-btn {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
      background: #000000;
      color: #ffffff;
      font-weight: 700;
      border: none;
      border-radius: 6px;
      height: 40px;
      padding: 0 16px;
      cursor: pointer;
      transition: background 150ms ease;
    }

    .submit-btn:hover {
      background: #1f2937;
    }

    .submit-btn:disabled {
      background: #9ca3af;
      color: #e5e7eb;
      cursor: not-allowed;
    }
  </style>
</head>
<body>
  <header>
    <div class="header-inner">
      <div>
        <h1>Progress Tracker</h1>
        <p class="tagline">Log your progress, one rep at a time.</p>
      </div>
      <p class="greeting">Hello Raj.</p>
    </div>
  </header>

  <main>
    <div id="log"></div>
  </main>

  <form class="entry-form" id="entry-form">
    <div class="form-inner">
      <div class="indicator-row">
        <div class="indicator" id="indicator" aria-live="polite"></div>
      </div>
      <div class="split-row">
        <span class="field-label">Split</span>
        <div class="split-buttons">
          <button type="button" class="split-btn" data-split="Push">Push</button>
          <button type="button" class="split-btn" data-split="Pull">Pull</button>
          <button type="button" class="split-btn" data-split="Legs">Legs</button>
        </div>
      </div>
      <div class="field-grid">
        <div>
          <label class="field-label" for="name">Exercise Name</label>
          <input id="name" type="text" placeholder="e.g. Bench Press" autocomplete="off" />
        </div>
        <div>
          <label class="field-label" for="sets">Sets</label>
          <input id="sets" type="number" min="1" placeholder="3" />
        </div>
        <div>
          <label class="field-label" for="reps">Reps</label>
          <input id="reps" type="number" min="1" placeholder="10" />
        </div>
        <div>
          <label class="field-label" for="weight">Weight (kg)</label>
          <input id="weight" type="number" min="0" step="0.5" placeholder="60" />
        </div>
        <button class="submit-btn" id="submit-btn" type="submit">+ Add</button>
      </div>
    </div>
  </form>

  <script>
    const logEl = document.getElementById('log');
    const formEl = document.getElementById('entry-form');
    const indicatorEl = document.getElementById('indicator');
    const submitBtn = document.getElementById('submit-btn');
    const nameEl = document.getElementById('name');
    const setsEl = document.getElementById('sets');
    const repsEl = document.getElementById('reps');
    const weightEl = document.getElementById('weight');
    const splitButtons = Array.from(document.querySelectorAll('.split-btn'));

    let split = null;
    let statusTimer = null;

    const trashIcon =
      '<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">' +
      '<path d="M3 6h18M8 6V4a1 1 0 0 1 1-1h6a1 1 0 0 1 1 1v2m3 0v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" />' +
      '</svg>';

    const escapeHtml = (value) =>
      value.replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const formatDay = (iso) =>
      new Date(iso).toLocaleDateString(undefined, {
        year: 'numeric',
        month: 'long',
        day: 'numeric'
      });

    const currentDraft = () => ({
      name: nameEl.value,
      sets: setsEl.value,
      reps: repsEl.value,
      weight: weightEl.value,
      split
    });

    const applyDraft = (draft) => {
      nameEl.value = draft.name || '';
      setsEl.value = draft.sets || '';
      repsEl.value = draft.reps || '';
      weightEl.value = draft.weight || '';
      split = draft.split || null;
      splitButtons.forEach((button) => {
        button.classList.toggle('active', button.dataset.split === split);
      });
      refreshSubmit();
    };

    const refreshSubmit = () => {
      submitBtn.disabled =
        !nameEl.value.trim() || !setsEl.value || !repsEl.value || !weightEl.value;
    };

    const setStatus = (status) => {
      if (status === 'saving') {
        indicatorEl.innerHTML = '<span class="spinner"></span><span>Saving...</span>';
        indicatorEl.classList.add('visible');
      } else if (status === 'saved') {
        indicatorEl.innerHTML = '<span class="check">&#10003;</span><span>Saved</span>';
        indicatorEl.classList.add('visible');
      } else {
        indicatorEl.classList.remove('visible');
      }
    };

    const watchStatus = () => {
      if (statusTimer) {
        return;
      }
      statusTimer = setInterval(async () => {
        const res = await fetch('/api/draft');
        if (!res.ok) {
          return;
        }
        const body = await res.json();
        setStatus(body.status);
        if (body.status === 'idle') {
          clearInterval(statusTimer);
          statusTimer = null;
        }
      }, 500);
    };

    const pushDraft = async () => {
      refreshSubmit();
      const res = await fetch('/api/draft', {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(currentDraft())
      });
      if (res.ok) {
        const body = await res.json();
        setStatus(body.status);
        watchStatus();
      }
    };

    const renderEntry = (exercise) => {
      const badge = exercise.split
        ? `<span class="badge ${exercise.split}">${exercise.split}</span>`
        : '';
      return `
        <div class="entry">
          <div class="entry-name">
            <h3>${escapeHtml(exercise.name)}</h3>
            ${badge}
          </div>
          <div class="entry-stats">
            <div class="numbers">
              <div>${exercise.sets} &times; ${exercise.reps} reps</div>
              <div class="weight">${exercise.weight} kg</div>
            </div>
            <button type="button" class="icon-btn" data-delete-id="${exercise.id}"
              aria-label="Delete ${escapeHtml(exercise.name)} workout">${trashIcon}</button>
          </div>
        </div>`;
    };

    const renderDay = (group) => `
      <section class="day-card">
        <div class="day-head">
          <h2>${formatDay(group.exercises[0].date)}</h2>
          <button type="button" class="icon-btn" data-delete-day="${group.day}"
            aria-label="Delete all workouts for ${group.day}">${trashIcon}</button>
        </div>
        <div>${group.exercises.map(renderEntry).join('')}</div>
      </section>`;

    const renderLog = (data) => {
      if (data.total === 0) {
        logEl.innerHTML =
          '<div class="empty">' +
          '<p class="headline">No workouts logged yet.</p>' +
          '<p class="hint">Use the form below to add your first one!</p>' +
          '</div>';
        return;
      }
      logEl.innerHTML = `<div class="day-grid">${data.days.map(renderDay).join('')}</div>`;
    };

    const loadLog = async () => {
      const res = await fetch('/api/log');
      if (res.ok) {
        renderLog(await res.json());
      }
    };

    const loadDraft = async () => {
      const res = await fetch('/api/draft');
      if (res.ok) {
        const body = await res.json();
        applyDraft(body.draft);
        setStatus(body.status);
      }
    };

    logEl.addEventListener('click', async (event) => {
      const button = event.target.closest('[data-delete-id], [data-delete-day]');
      if (!button) {
        return;
      }
      const url = button.dataset.deleteId
        ? `/api/exercises/${button.dataset.deleteId}`
        : `/api/days/${button.dataset.deleteDay}`;
      const res = await fetch(url, { method: 'DELETE' });
      if (res.ok) {
        renderLog(await res.json());
      }
    });

    splitButtons.forEach((button) => {
      button.addEventListener('click', () => {
        // Clicking the active split deselects it.
        split = split === button.dataset.split ? null : button.dataset.split;
        splitButtons.forEach((other) => {
          other.classList.toggle('active', other.dataset.split === split);
        });
        pushDraft();
      });
    });

    const fieldOrder = [nameEl, setsEl, repsEl, weightEl];
    fieldOrder.forEach((input, index) => {
      input.addEventListener('input', pushDraft);
      input.addEventListener('keydown', (event) => {
        if (event.key === 'Enter') {
          event.preventDefault();
          const next = fieldOrder[index + 1] || submitBtn;
          next.focus();
        }
      });
    });

    formEl.addEventListener('submit', async (event) => {
      event.preventDefault();
      const draft = currentDraft();
      if (!draft.name.trim() || !draft.sets || !draft.reps || !draft.weight) {
        alert('Please fill out all fields.');
        return;
      }

      const res = await fetch('/api/exercises', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(draft)
      });
      if (!res.ok) {
        alert(await res.text());
        return;
      }

      const body = await res.json();
      applyDraft(body.draft);
      setStatus('saving');
      watchStatus();
      await loadLog();
      nameEl.focus();
    });

    loadDraft().then(loadLog);
  </script>
</body>
</html>
"##;
