pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--neutral-300);
  text-decoration: none;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

/* Forms */
.form-input {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--background);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px rgba(109, 40, 217, 0.2);
}

.form-status {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.form-status-ok {
  color: var(--primary);
}

.form-status-error {
  color: #DC2626;
}

/* Section headers */
.section-heading {
  font-size: 2.5rem;
  font-weight: 700;
  text-align: center;
  color: var(--text-primary);
}

.section-subheading {
  margin-top: var(--space-3);
  text-align: center;
  color: var(--text-secondary);
  font-size: 1.125rem;
  max-width: 42rem;
  margin-left: auto;
  margin-right: auto;
}

/* Card accent bars */
.accent-primary {
  background: linear-gradient(120deg, var(--primary), var(--primary-light));
}

.accent-secondary {
  background: linear-gradient(120deg, var(--secondary), var(--secondary-dark));
}

.accent-tertiary {
  background: linear-gradient(120deg, var(--tertiary), var(--primary-light));
}

/* Scroll reveal */
.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.reveal-visible {
  opacity: 1;
  transform: translateY(0);
}

/* Theme switcher */
.theme-switcher {
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: transparent;
  color: var(--text-secondary);
  font-size: 0.8125rem;
  cursor: pointer;
}

.theme-switcher:hover {
  color: var(--text-primary);
  border-color: var(--text-tertiary);
}
"#;
