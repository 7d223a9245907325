//! Global CSS styles for Procura.
//!
//! Warm hospitality aesthetic from DESIGN_SYSTEM.md.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #fdfbf7;
  --paper-raised: #ffffff;
  --paper-sunken: #f4efe6;
  --hairline: #e6e0d4;

  /* INK (Text) */
  --ink: #1f2a37;
  --ink-soft: rgba(31, 42, 55, 0.72);
  --ink-muted: rgba(31, 42, 55, 0.5);

  /* TEAL (Actions, Links, Selection) */
  --teal: #0f6f6c;
  --teal-deep: #0b5654;
  --teal-tint: rgba(15, 111, 108, 0.08);

  /* AMBER (Calls to Action, Highlights) */
  --amber: #e8a33d;
  --amber-deep: #c9872a;
  --amber-tint: rgba(232, 163, 61, 0.14);

  /* SEMANTIC */
  --danger: #c0392b;
  --danger-tint: rgba(192, 57, 43, 0.1);
  --success: #2e7d4f;
  --success-tint: rgba(46, 125, 79, 0.12);
  --info: #2c6e91;

  /* Typography */
  --font-display: 'Fraunces', 'Iowan Old Style', Georgia, serif;
  --font-body: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Layout */
  --container: 1080px;
  --radius: 10px;
  --radius-lg: 16px;
  --shadow-soft: 0 10px 30px rgba(31, 42, 55, 0.08);
  --shadow-lift: 0 14px 38px rgba(31, 42, 55, 0.14);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.65;
  min-height: 100vh;
}

img {
  max-width: 100%;
  display: block;
}

a {
  color: var(--teal);
  text-decoration: none;
  transition: color var(--transition-fast);
}

a:hover {
  color: var(--teal-deep);
}

/* === Shell === */
.site-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.site-main {
  flex: 1;
}

.container {
  width: 100%;
  max-width: var(--container);
  margin: 0 auto;
  padding: 0 24px;
}

/* === Typography === */
.page-head {
  max-width: 720px;
  margin: 64px auto 40px;
  padding: 0 24px;
  text-align: center;
}

.page-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 600;
  line-height: 1.15;
  letter-spacing: -0.01em;
}

.page-sub {
  margin-top: 14px;
  font-size: var(--text-lg);
  color: var(--ink-soft);
}

.eyebrow {
  display: inline-block;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.14em;
  text-transform: uppercase;
  color: var(--teal);
  margin-bottom: 12px;
}

.muted {
  color: var(--ink-muted);
}

/* === Nav Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: rgba(253, 251, 247, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--hairline);
}

.nav-inner {
  max-width: var(--container);
  margin: 0 auto;
  padding: 14px 24px;
  display: flex;
  align-items: center;
  gap: 28px;
}

.nav-logo {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--ink);
}

.nav-logo span {
  color: var(--teal);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 20px;
  flex: 1;
}

.nav-link {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-soft);
  padding: 6px 2px;
  border-bottom: 2px solid transparent;
}

.nav-link:hover {
  color: var(--ink);
}

.nav-link.active {
  color: var(--teal);
  border-bottom-color: var(--teal);
}

.nav-group {
  position: relative;
}

.nav-group-label {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-soft);
  background: none;
  border: none;
  cursor: pointer;
  padding: 6px 2px;
  font-family: inherit;
}

.nav-group-label:hover {
  color: var(--ink);
}

.nav-group-menu {
  position: absolute;
  top: calc(100% + 8px);
  left: -12px;
  min-width: 230px;
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
  padding: 8px;
  display: flex;
  flex-direction: column;
}

.nav-group-menu .nav-link {
  padding: 9px 12px;
  border-radius: 6px;
  border-bottom: none;
}

.nav-group-menu .nav-link:hover {
  background: var(--teal-tint);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 12px;
}

/* === Site Footer === */
.site-footer {
  background: var(--ink);
  color: rgba(253, 251, 247, 0.85);
  margin-top: 80px;
}

.footer-grid {
  max-width: var(--container);
  margin: 0 auto;
  padding: 56px 24px 40px;
  display: grid;
  grid-template-columns: 2fr 1fr 1fr 1.5fr;
  gap: 40px;
}

.footer-brand {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 700;
  color: #fff;
}

.footer-tagline {
  margin-top: 10px;
  font-size: var(--text-sm);
  color: rgba(253, 251, 247, 0.6);
  max-width: 280px;
}

.footer-heading {
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: rgba(253, 251, 247, 0.55);
  margin-bottom: 14px;
}

.footer-col {
  display: flex;
  flex-direction: column;
  gap: 9px;
}

.footer-link {
  font-size: var(--text-sm);
  color: rgba(253, 251, 247, 0.85);
}

.footer-link:hover {
  color: var(--amber);
}

.footer-newsletter {
  display: flex;
  gap: 8px;
  margin-top: 6px;
}

.footer-newsletter .input-field {
  background: rgba(255, 255, 255, 0.08);
  border-color: rgba(255, 255, 255, 0.2);
  color: #fff;
}

.footer-newsletter .input-field::placeholder {
  color: rgba(253, 251, 247, 0.45);
}

.footer-note {
  margin-top: 10px;
  font-size: var(--text-xs);
  color: rgba(253, 251, 247, 0.55);
}

.footer-note.ok {
  color: var(--amber);
}

.footer-bottom {
  border-top: 1px solid rgba(253, 251, 247, 0.12);
  padding: 18px 24px;
  text-align: center;
  font-size: var(--text-xs);
  color: rgba(253, 251, 247, 0.45);
}

/* === Buttons === */
.btn-primary,
.btn-cta,
.btn-outline,
.btn-ghost,
.btn-danger {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  font-family: var(--font-body);
  font-size: var(--text-sm);
  font-weight: 600;
  padding: 11px 22px;
  border-radius: var(--radius);
  border: 1px solid transparent;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast),
    background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--teal);
  color: #fff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--teal-deep);
  transform: translateY(-1px);
  box-shadow: var(--shadow-soft);
}

.btn-cta {
  background: var(--amber);
  color: var(--ink);
  padding: 13px 28px;
  font-size: var(--text-base);
}

.btn-cta:hover:not(:disabled) {
  background: var(--amber-deep);
  transform: translateY(-1px);
  box-shadow: var(--shadow-lift);
}

.btn-outline {
  background: transparent;
  color: var(--teal);
  border-color: var(--teal);
}

.btn-outline:hover:not(:disabled) {
  background: var(--teal-tint);
}

.btn-ghost {
  background: transparent;
  color: var(--ink-soft);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--ink);
  background: var(--paper-sunken);
}

.btn-danger {
  background: transparent;
  color: var(--danger);
  border-color: var(--danger);
}

.btn-danger:hover:not(:disabled) {
  background: var(--danger-tint);
}

.btn-primary:disabled,
.btn-cta:disabled,
.btn-outline:disabled,
.btn-ghost:disabled,
.btn-danger:disabled {
  opacity: 0.45;
  cursor: not-allowed;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 28px;
  height: 28px;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: var(--ink-muted);
  font-size: var(--text-base);
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.icon-btn:hover {
  background: var(--paper-sunken);
  color: var(--ink);
}

.close-btn {
  position: absolute;
  top: 14px;
  right: 14px;
  font-size: var(--text-lg);
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 6px;
  margin-bottom: 16px;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink);
}

.input-hint {
  font-weight: 400;
  color: var(--ink-muted);
}

.input-field {
  width: 100%;
  font-family: var(--font-body);
  font-size: var(--text-base);
  color: var(--ink);
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius);
  padding: 11px 14px;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field::placeholder {
  color: var(--ink-muted);
}

.input-field:focus {
  outline: none;
  border-color: var(--teal);
  box-shadow: 0 0 0 3px var(--teal-tint);
}

.input-field:disabled {
  background: var(--paper-sunken);
  color: var(--ink-muted);
}

.input-field.input-error,
.input-field.input-error:focus {
  border-color: var(--danger);
  box-shadow: 0 0 0 3px var(--danger-tint);
}

.input-error-text {
  font-size: var(--text-sm);
  color: var(--danger);
}

.textarea {
  resize: vertical;
  min-height: 96px;
}

.search-input-wrapper {
  position: relative;
  flex: 1;
}

.search-icon {
  position: absolute;
  left: 13px;
  top: 50%;
  transform: translateY(-50%);
  font-size: var(--text-sm);
  opacity: 0.6;
}

.search-input {
  padding-left: 40px;
}

/* === Code Boxes (one-time code) === */
.code-row {
  display: flex;
  gap: 10px;
  justify-content: center;
  margin: 22px 0;
}

.code-box {
  width: 48px;
  height: 56px;
  text-align: center;
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--ink);
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.code-box:focus {
  outline: none;
  border-color: var(--teal);
  box-shadow: 0 0 0 3px var(--teal-tint);
}

/* === Pills === */
.pill-row {
  display: flex;
  flex-wrap: wrap;
  gap: 10px;
}

.pill-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 12px;
}

.pill {
  font-family: var(--font-body);
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-soft);
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: 999px;
  padding: 9px 18px;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pill:hover {
  border-color: var(--teal);
  color: var(--teal);
}

.pill.selected {
  background: var(--teal);
  border-color: var(--teal);
  color: #fff;
}

/* === Email Chips === */
.email-chips {
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.email-chips-row {
  display: flex;
  gap: 10px;
}

.email-chips-row .input-field {
  flex: 1;
}

.chip-add {
  white-space: nowrap;
}

.chip-list {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
  margin-top: 4px;
}

.chip {
  display: inline-flex;
  align-items: center;
  gap: 4px;
  background: var(--teal-tint);
  border: 1px solid transparent;
  border-radius: 999px;
  padding: 5px 6px 5px 14px;
  font-size: var(--text-sm);
  color: var(--teal-deep);
}

.chip-text {
  max-width: 240px;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.chip-remove {
  width: 22px;
  height: 22px;
  font-size: var(--text-sm);
  color: var(--teal-deep);
}

/* === Step Progress === */
.step-progress {
  margin-bottom: 28px;
}

.step-progress-label {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink-soft);
  margin-bottom: 8px;
}

.step-progress-pct {
  color: var(--teal);
}

.step-progress-track {
  height: 6px;
  background: var(--paper-sunken);
  border-radius: 999px;
  overflow: hidden;
}

.step-progress-fill {
  height: 100%;
  background: var(--teal);
  border-radius: 999px;
  transition: width var(--transition-normal);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(31, 42, 55, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
  animation: fade-in var(--transition-fast);
}

.modal-card {
  position: relative;
  background: var(--paper-raised);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lift);
  padding: 36px;
  width: min(480px, calc(100vw - 48px));
  animation: rise-in var(--transition-normal);
}

.modal-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 10px;
}

.modal-description {
  color: var(--ink-soft);
  margin-bottom: 22px;
}

.success-dialog {
  text-align: center;
}

.success-mark {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 56px;
  height: 56px;
  border-radius: 50%;
  background: var(--success-tint);
  color: var(--success);
  font-size: var(--text-xl);
  margin-bottom: 16px;
}

/* === Stat Cards === */
.stat-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 18px;
}

.stat-card {
  display: flex;
  flex-direction: column;
  gap: 4px;
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  padding: 22px;
}

.stat-label {
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--ink-muted);
}

.stat-value {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--ink);
}

.stat-detail {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

/* === Hero === */
.hero {
  padding: 88px 24px 64px;
  text-align: center;
  background:
    radial-gradient(ellipse 70% 55% at 50% -10%, var(--amber-tint), transparent),
    var(--paper);
}

.hero-inner {
  max-width: 780px;
  margin: 0 auto;
}

.hero-badge {
  display: inline-block;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--teal);
  background: var(--teal-tint);
  border-radius: 999px;
  padding: 6px 16px;
  margin-bottom: 22px;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.4rem, 5vw, 3.4rem);
  font-weight: 600;
  line-height: 1.12;
  letter-spacing: -0.015em;
}

.hero-title .accent {
  color: var(--teal);
}

.hero-sub {
  margin: 20px auto 0;
  max-width: 560px;
  font-size: var(--text-lg);
  color: var(--ink-soft);
}

.hero-actions {
  margin-top: 34px;
  display: flex;
  justify-content: center;
  gap: 14px;
}

.typing-text {
  color: var(--teal);
}

.typing-caret {
  display: inline-block;
  width: 3px;
  height: 1em;
  background: var(--amber);
  margin-left: 4px;
  vertical-align: text-bottom;
  animation: caret-blink 0.9s step-end infinite;
}

/* === Sections === */
.section {
  padding: 72px 24px;
}

.section-alt {
  background: var(--paper-sunken);
}

.section-head {
  max-width: 640px;
  margin: 0 auto 44px;
  text-align: center;
}

.section-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 600;
  line-height: 1.2;
}

.section-sub {
  margin-top: 12px;
  color: var(--ink-soft);
}

.feature-grid {
  max-width: var(--container);
  margin: 0 auto;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 22px;
}

.feature-grid.cols-2 {
  grid-template-columns: repeat(2, 1fr);
}

.feature-grid.cols-4 {
  grid-template-columns: repeat(4, 1fr);
}

.feature-card {
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  padding: 26px;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.feature-card:hover {
  transform: translateY(-3px);
  box-shadow: var(--shadow-soft);
}

.feature-icon {
  font-size: var(--text-xl);
  margin-bottom: 14px;
}

.feature-title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 8px;
}

.feature-text {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.split {
  max-width: var(--container);
  margin: 0 auto;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 48px;
  align-items: center;
}

.split-copy .section-title {
  text-align: left;
}

.split-art {
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  min-height: 280px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 3rem;
  box-shadow: var(--shadow-soft);
}

.check-list {
  list-style: none;
  margin-top: 18px;
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.check-list li {
  padding-left: 28px;
  position: relative;
  color: var(--ink-soft);
}

.check-list li::before {
  content: '\2713';
  position: absolute;
  left: 0;
  color: var(--success);
  font-weight: 700;
}

.logo-strip {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 14px;
  max-width: 820px;
  margin: 0 auto;
}

.logo-chip {
  font-family: var(--font-display);
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink-muted);
  border: 1px dashed var(--hairline);
  border-radius: var(--radius);
  padding: 10px 20px;
}

.cta-band {
  max-width: var(--container);
  margin: 0 auto;
  background: var(--teal);
  color: #fff;
  border-radius: var(--radius-lg);
  padding: 54px 40px;
  text-align: center;
}

.cta-band .section-title {
  color: #fff;
}

.cta-band .section-sub {
  color: rgba(255, 255, 255, 0.8);
}

.cta-band .btn-cta {
  margin-top: 26px;
}

.quote-card {
  background: var(--paper-raised);
  border-left: 4px solid var(--amber);
  border-radius: var(--radius);
  padding: 24px 28px;
  box-shadow: var(--shadow-soft);
}

.quote-text {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-style: italic;
}

.quote-attrib {
  margin-top: 12px;
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

/* === Learn Page === */
.learn-controls {
  max-width: var(--container);
  margin: 0 auto 36px;
  padding: 0 24px;
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.learn-search-row {
  display: flex;
  gap: 14px;
  align-items: center;
}

.article-grid {
  max-width: var(--container);
  margin: 0 auto;
  padding: 0 24px 72px;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 24px;
}

.article-card {
  display: flex;
  flex-direction: column;
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  overflow: hidden;
  cursor: pointer;
  text-align: left;
  font-family: var(--font-body);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.article-card:hover {
  transform: translateY(-3px);
  box-shadow: var(--shadow-lift);
}

.article-image {
  height: 160px;
  width: 100%;
  object-fit: cover;
  background: var(--paper-sunken);
}

.article-body {
  padding: 20px;
  display: flex;
  flex-direction: column;
  gap: 10px;
  flex: 1;
}

.article-badge {
  align-self: flex-start;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--teal);
  background: var(--teal-tint);
  border-radius: 999px;
  padding: 4px 12px;
}

.article-title {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 600;
  line-height: 1.3;
}

.article-preview {
  font-size: var(--text-sm);
  color: var(--ink-soft);
  flex: 1;
}

.article-meta {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

.learn-empty {
  grid-column: 1 / -1;
  text-align: center;
  padding: 60px 0;
  color: var(--ink-muted);
}

/* === Article Reader === */
.reader {
  max-width: 720px;
  margin: 48px auto 80px;
  padding: 0 24px;
}

.reader-back {
  margin-bottom: 26px;
}

.reader-head {
  margin-bottom: 30px;
}

.reader-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 600;
  line-height: 1.2;
  margin: 14px 0;
}

.reader-meta {
  display: flex;
  gap: 14px;
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

.markdown-body h2 {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 600;
  margin: 34px 0 12px;
}

.markdown-body h3 {
  font-size: var(--text-lg);
  font-weight: 600;
  margin: 26px 0 10px;
}

.markdown-body p {
  margin: 0 0 16px;
  color: var(--ink-soft);
}

.markdown-body ul,
.markdown-body ol {
  margin: 0 0 16px 22px;
  color: var(--ink-soft);
}

.markdown-body li {
  margin-bottom: 6px;
}

.markdown-body blockquote {
  border-left: 4px solid var(--amber);
  background: var(--amber-tint);
  border-radius: 0 var(--radius) var(--radius) 0;
  padding: 14px 20px;
  margin: 0 0 16px;
  font-style: italic;
}

.markdown-body blockquote p {
  margin: 0;
}

.markdown-body table {
  width: 100%;
  border-collapse: collapse;
  margin: 0 0 16px;
  font-size: var(--text-sm);
}

.markdown-body th,
.markdown-body td {
  border: 1px solid var(--hairline);
  padding: 9px 12px;
  text-align: left;
}

.markdown-body th {
  background: var(--paper-sunken);
  font-weight: 600;
}

.markdown-body code {
  font-family: 'JetBrains Mono', monospace;
  font-size: 0.9em;
  background: var(--paper-sunken);
  border-radius: 4px;
  padding: 2px 6px;
}

.markdown-body strong {
  color: var(--ink);
}

/* === Chat Preview (Anita) === */
.chat-preview {
  max-width: 560px;
  margin: 0 auto;
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-soft);
  overflow: hidden;
}

.chat-head {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 16px 20px;
  border-bottom: 1px solid var(--hairline);
  background: var(--paper-sunken);
}

.chat-avatar {
  width: 38px;
  height: 38px;
  border-radius: 50%;
  background: var(--teal);
  color: #fff;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
}

.chat-name {
  font-weight: 600;
}

.chat-status {
  font-size: var(--text-xs);
  color: var(--success);
}

.chat-scroll {
  padding: 20px;
  display: flex;
  flex-direction: column;
  gap: 12px;
  min-height: 260px;
}

.chat-bubble {
  max-width: 80%;
  padding: 11px 16px;
  border-radius: 16px;
  font-size: var(--text-sm);
  animation: rise-in var(--transition-normal);
}

.chat-bubble.bot {
  align-self: flex-start;
  background: var(--paper-sunken);
  color: var(--ink);
  border-bottom-left-radius: 4px;
}

.chat-bubble.user {
  align-self: flex-end;
  background: var(--teal);
  color: #fff;
  border-bottom-right-radius: 4px;
}

.chat-input-row {
  display: flex;
  gap: 10px;
  padding: 14px 20px;
  border-top: 1px solid var(--hairline);
}

.chat-input-row .input-field {
  flex: 1;
}

/* === Wizard === */
.wizard-page {
  min-height: calc(100vh - 120px);
  display: flex;
  align-items: flex-start;
  justify-content: center;
  padding: 56px 24px;
  background:
    radial-gradient(ellipse 60% 40% at 50% 0%, var(--teal-tint), transparent),
    var(--paper);
}

.wizard-card {
  width: min(640px, 100%);
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-soft);
  padding: 40px 44px;
}

.wizard-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 8px;
}

.wizard-sub {
  color: var(--ink-soft);
  margin-bottom: 26px;
}

.wizard-body {
  min-height: 180px;
}

.wizard-actions {
  display: flex;
  justify-content: space-between;
  margin-top: 32px;
}

.role-cards {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 20px;
  margin-top: 26px;
}

.role-card {
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  padding: 30px 26px;
  text-align: left;
  cursor: pointer;
  font-family: var(--font-body);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.role-card:hover {
  border-color: var(--teal);
  box-shadow: var(--shadow-soft);
}

.role-card-icon {
  display: block;
  font-size: var(--text-2xl);
  margin-bottom: 12px;
}

.role-card-title {
  display: block;
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 6px;
}

.role-card-text {
  display: block;
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

/* === Dashboard === */
.dash-page {
  max-width: var(--container);
  margin: 0 auto;
  padding: 48px 24px 72px;
}

.dash-head {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  margin-bottom: 30px;
}

.dash-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 600;
}

.dash-sub {
  color: var(--ink-soft);
  margin-top: 6px;
}

.dash-banner {
  background: var(--amber-tint);
  border: 1px solid var(--amber);
  border-radius: var(--radius);
  padding: 12px 18px;
  font-size: var(--text-sm);
  margin-bottom: 28px;
}

.activity-card {
  margin-top: 28px;
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  padding: 26px;
}

.activity-title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 16px;
}

.activity-list {
  list-style: none;
  display: flex;
  flex-direction: column;
}

.activity-item {
  display: flex;
  align-items: baseline;
  gap: 14px;
  padding: 13px 0;
  border-bottom: 1px solid var(--hairline);
}

.activity-item:last-child {
  border-bottom: none;
}

.activity-label {
  flex-shrink: 0;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.06em;
  text-transform: uppercase;
  color: var(--teal);
  min-width: 130px;
}

.activity-detail {
  flex: 1;
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.activity-time {
  font-size: var(--text-xs);
  color: var(--ink-muted);
  white-space: nowrap;
}

/* === Form Pages (contact, book demo) === */
.form-page {
  max-width: var(--container);
  margin: 0 auto;
  padding: 56px 24px 80px;
  display: grid;
  grid-template-columns: 1fr 1.2fr;
  gap: 56px;
}

.form-aside .section-title {
  text-align: left;
}

.form-card {
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-soft);
  padding: 36px;
}

.form-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0 18px;
}

.form-grid .form-field.wide {
  grid-column: 1 / -1;
}

.form-actions {
  margin-top: 8px;
  display: flex;
  justify-content: flex-end;
}

.contact-channels {
  margin-top: 26px;
  display: flex;
  flex-direction: column;
  gap: 14px;
}

.contact-channel {
  display: flex;
  gap: 12px;
  align-items: baseline;
  color: var(--ink-soft);
  font-size: var(--text-sm);
}

.contact-channel .label {
  font-weight: 600;
  color: var(--ink);
  min-width: 80px;
}

/* === Login === */
.login-page {
  min-height: calc(100vh - 70px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 48px 24px;
}

.login-card {
  width: min(440px, 100%);
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-soft);
  padding: 40px;
}

.login-tabs {
  display: flex;
  gap: 4px;
  background: var(--paper-sunken);
  border-radius: var(--radius);
  padding: 4px;
  margin-bottom: 28px;
}

.login-tab {
  flex: 1;
  font-family: var(--font-body);
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink-soft);
  background: transparent;
  border: none;
  border-radius: 7px;
  padding: 9px 0;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.login-tab.active {
  background: var(--paper-raised);
  color: var(--teal);
  box-shadow: var(--shadow-soft);
}

.resend-row {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 6px;
  margin-top: 18px;
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

.login-footer {
  margin-top: 22px;
  text-align: center;
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

/* === Not Found === */
.notfound {
  max-width: 560px;
  margin: 100px auto;
  padding: 0 24px;
  text-align: center;
}

.notfound-code {
  font-family: var(--font-display);
  font-size: 5rem;
  font-weight: 700;
  color: var(--teal);
  line-height: 1;
}

.notfound-path {
  font-family: 'JetBrains Mono', monospace;
  font-size: var(--text-sm);
  background: var(--paper-sunken);
  border-radius: var(--radius);
  padding: 8px 14px;
  display: inline-block;
  margin: 16px 0 26px;
}

/* === Stat Band === */
.stat-band {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 18px;
  background: var(--paper-sunken);
  border-radius: var(--radius-lg);
  padding: 30px 26px;
  margin: 36px 0;
  text-align: center;
}

.stat-band-item {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.stat-band-value {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--teal);
}

.stat-band-caption {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

/* === FAQ === */
.faq-list {
  max-width: 720px;
  margin: 0 auto 56px;
}

.faq-item {
  border-bottom: 1px solid var(--hairline);
}

.faq-question {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 18px 4px;
  font-weight: 600;
  cursor: pointer;
}

.faq-toggle {
  font-size: var(--text-xs);
  color: var(--teal);
}

.faq-answer {
  padding: 0 4px 20px 28px;
  color: var(--ink-soft);
}

/* === Marketplace Showcase === */
.market-tabs {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 10px;
  margin: 40px 0 26px;
}

.market-tab {
  font-family: var(--font-body);
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink-soft);
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: 999px;
  padding: 9px 20px;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.market-tab:hover {
  border-color: var(--teal);
  color: var(--teal);
}

.market-tab.active {
  background: var(--teal);
  border-color: var(--teal);
  color: #fff;
}

.market-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 20px;
  margin-bottom: 48px;
}

.market-tile {
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  padding: 24px 20px;
  display: flex;
  flex-direction: column;
  gap: 8px;
  transition: box-shadow var(--transition-fast);
}

.market-tile:hover {
  box-shadow: var(--shadow-soft);
}

.market-emoji {
  font-size: var(--text-2xl);
}

.market-name {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 600;
}

.market-line {
  font-size: var(--text-sm);
  color: var(--ink-soft);
  flex: 1;
}

.market-verified {
  align-self: flex-start;
  font-size: var(--text-xs);
  font-weight: 600;
  color: var(--success);
  background: var(--success-tint);
  border-radius: 999px;
  padding: 4px 12px;
}

/* === Anita Hero === */
.anita-hero {
  display: grid;
  grid-template-columns: 1.1fr 1fr;
  gap: 48px;
  align-items: center;
  padding: 72px 24px 40px;
}

.anita-hero-copy .page-title {
  margin-bottom: 18px;
}

/* === RFQ Walkthrough === */
.rfq-steps {
  list-style: none;
  max-width: 720px;
  margin: 0 auto 56px;
  display: flex;
  flex-direction: column;
  gap: 28px;
}

.rfq-step {
  display: flex;
  gap: 20px;
  align-items: flex-start;
}

.rfq-step-num {
  flex-shrink: 0;
  width: 40px;
  height: 40px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--font-display);
  font-weight: 600;
  color: var(--teal);
  background: var(--teal-tint);
  border-radius: 50%;
}

.rfq-step-title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 4px;
}

.rfq-step-text {
  color: var(--ink-soft);
}

.rfq-example {
  max-width: 720px;
  margin: 0 auto 56px;
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  padding: 30px 28px;
  box-shadow: var(--shadow-soft);
}

.rfq-example-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  margin: 8px 0 20px;
}

.rfq-example-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 20px 28px;
}

.rfq-example-label {
  display: block;
  font-size: var(--text-xs);
  font-weight: 600;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--ink-muted);
  margin-bottom: 4px;
}

/* === Storefront Preview === */
.storefront-preview {
  max-width: 760px;
  margin: 0 auto 56px;
  background: var(--paper-raised);
  border: 1px solid var(--hairline);
  border-radius: var(--radius-lg);
  overflow: hidden;
  box-shadow: var(--shadow-soft);
}

.storefront-cover {
  height: 120px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 3rem;
  background: var(--teal-tint);
}

.storefront-head {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  padding: 24px 28px 0;
}

.storefront-name {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 600;
}

.storefront-meta {
  font-size: var(--text-sm);
  color: var(--ink-muted);
  margin-top: 2px;
}

.storefront-blurb {
  padding: 14px 28px 0;
  color: var(--ink-soft);
}

.storefront-lines {
  margin: 22px 28px 0;
  border-top: 1px solid var(--hairline);
}

.storefront-line {
  display: grid;
  grid-template-columns: 1fr auto auto;
  gap: 18px;
  padding: 12px 0;
  border-bottom: 1px solid var(--hairline);
  font-size: var(--text-sm);
}

.line-name {
  font-weight: 500;
}

.line-price {
  font-weight: 600;
}

.line-lead {
  color: var(--ink-muted);
}

.storefront-note {
  padding: 14px 28px 24px;
  font-size: var(--text-xs);
  color: var(--ink-muted);
  font-style: italic;
}

/* === Animations === */
@keyframes caret-blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0; }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes rise-in {
  from {
    opacity: 0;
    transform: translateY(10px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* === Responsive === */
@media (max-width: 980px) {
  .feature-grid,
  .feature-grid.cols-4 {
    grid-template-columns: repeat(2, 1fr);
  }

  .article-grid,
  .market-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .stat-grid,
  .stat-band {
    grid-template-columns: repeat(2, 1fr);
  }

  .anita-hero {
    grid-template-columns: 1fr;
  }

  .split,
  .form-page {
    grid-template-columns: 1fr;
  }

  .footer-grid {
    grid-template-columns: 1fr 1fr;
  }
}

@media (max-width: 640px) {
  .nav-links {
    display: none;
  }

  .feature-grid,
  .feature-grid.cols-2,
  .feature-grid.cols-4,
  .article-grid,
  .market-grid,
  .stat-grid,
  .role-cards,
  .rfq-example-grid {
    grid-template-columns: 1fr;
  }

  .hero-actions {
    flex-direction: column;
    align-items: center;
  }

  .footer-grid {
    grid-template-columns: 1fr;
  }

  .wizard-card {
    padding: 28px 22px;
  }
}
"#;
