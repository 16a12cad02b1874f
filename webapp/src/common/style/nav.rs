pub const NAV_STYLES: &str = r#"
/* Navigation bar */

.nav-wrapper {
  position: fixed;
  z-index: 50;
}

.nav-wrapper-top {
  top: 0;
  left: 0;
  width: 100%;
}

.nav-wrapper-floating {
  padding: var(--space-4) var(--space-8) 0;
}

.nav-wrapper-left {
  top: 0;
  left: 0;
  height: 100%;
}

.nav-shell {
  position: relative;
}

.nav-shell-standard {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.nav-shell-transparent {
  background-color: transparent;
}

.nav-shell-solid {
  background-color: var(--primary-dark);
}

.nav-shell-glass {
  background-color: var(--surface-translucent);
  border: 1px solid var(--border-dimmed);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
}

.nav-shell-glass-morphic {
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
}

.nav-inner {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-6);
}

.nav-logo {
  display: flex;
  align-items: center;
}

.nav-logo-text {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--text-primary);
}

.nav-desktop {
  display: none;
}

.nav-items {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-left: var(--space-8);
}

.nav-mobile-controls {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

@media (min-width: 768px) {
  .nav-desktop {
    display: flex;
    align-items: center;
  }

  .nav-mobile-controls {
    display: none;
  }
}

/* Items */

.nav-item {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  padding: var(--space-2) var(--space-1);
  font-size: 0.9375rem;
  font-weight: 500;
  background: none;
  border: none;
  cursor: pointer;
  font-family: inherit;
}

.nav-item-underline {
  border-bottom: 2px solid transparent;
}

.nav-item-sidebar {
  border-left: 2px solid transparent;
}

.nav-item-disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.nav-item-standard-active {
  border-color: var(--primary);
  color: var(--text-primary);
}

.nav-item-standard-inactive {
  color: var(--text-secondary);
}

.nav-item-standard-inactive:hover {
  border-color: var(--text-tertiary);
  color: var(--text-primary);
  text-decoration: none;
}

.nav-item-glass-active {
  border-color: var(--secondary);
  color: var(--text-primary);
}

.nav-item-glass-inactive {
  color: var(--text-tertiary);
}

.nav-item-glass-inactive:hover {
  border-color: var(--secondary);
  color: var(--text-primary);
  text-decoration: none;
}

.nav-item-solid-active {
  border-color: var(--secondary);
  color: var(--text-inverse);
}

.nav-item-solid-inactive {
  color: var(--text-inverse);
}

.nav-item-solid-inactive:hover {
  border-color: var(--secondary);
  color: var(--secondary);
  text-decoration: none;
}

.nav-chevron {
  width: 16px;
  height: 16px;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.nav-chevron-open {
  transform: rotate(180deg);
}

/* Dropdown */

.nav-parent {
  position: relative;
  align-self: center;
}

.nav-dropdown-anchor {
  position: absolute;
  left: 50%;
  transform: translateX(-50%);
  z-index: 50;
  margin-top: var(--space-4);
}

.nav-dropdown-panel {
  width: 26rem;
  max-width: calc(100vw - var(--space-8));
  padding: var(--space-2);
  border-radius: var(--radius-2xl);
  background-color: var(--surface);
  border: 1px solid var(--border-dimmed);
  box-shadow: var(--shadow-lg);
}

.nav-dropdown-row {
  position: relative;
  display: flex;
  gap: var(--space-4);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
}

.nav-dropdown-row:hover {
  background-color: var(--background);
}

.nav-dropdown-row-current {
  background-color: var(--background);
}

.nav-dropdown-row-disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.nav-dropdown-glyph {
  display: flex;
  height: 44px;
  width: 44px;
  flex: none;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-lg);
  background-color: var(--background);
}

.nav-dropdown-icon {
  width: 24px;
  height: 24px;
  color: var(--text-secondary);
}

.nav-dropdown-name {
  font-weight: 600;
  color: var(--text-primary);
}

.nav-dropdown-description {
  margin-top: var(--space-1);
  font-size: 0.8125rem;
  color: var(--text-tertiary);
}

.nav-dropdown-overlay {
  position: absolute;
  inset: 0;
}

/* Mobile drawer */

.nav-hamburger {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2);
  border: none;
  background: none;
  border-radius: var(--radius-md);
  color: var(--text-secondary);
  cursor: pointer;
}

.nav-hamburger-icon {
  width: 24px;
  height: 24px;
}

.nav-mobile {
  overflow-y: auto;
}

.nav-mobile-standard {
  background-color: var(--surface);
}

.nav-mobile-solid {
  background-color: var(--primary-dark);
}

.nav-mobile-glass {
  background-color: var(--surface-translucent);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
  border-radius: 0 0 var(--radius-xl) var(--radius-xl);
}

.nav-mobile-fullscreen {
  position: fixed;
  inset: 0;
  z-index: 40;
  padding-top: calc(var(--header-height) + var(--space-4));
  border-radius: 0;
}

.nav-mobile-items {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  padding: var(--space-6) var(--space-4);
}

.nav-mobile-item {
  display: block;
  padding: var(--space-2) var(--space-4);
  font-size: 0.9375rem;
  font-weight: 500;
  border-left: 4px solid transparent;
}

.nav-accordion-toggle {
  display: flex;
  width: 100%;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-2) var(--space-4);
  font-size: 0.9375rem;
  font-weight: 500;
  text-align: left;
  background: none;
  border: none;
  cursor: pointer;
  font-family: inherit;
}

.nav-accordion-children {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  animation: accordion-reveal var(--transition-normal) var(--easing-standard);
}

.nav-accordion-child {
  padding-left: var(--space-8);
}

@keyframes accordion-reveal {
  from {
    opacity: 0;
    transform: translateY(-4px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* Call to action */

.nav-cta {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  background-color: var(--secondary);
  color: var(--text-inverse);
  font-size: 0.875rem;
  font-weight: 500;
  box-shadow: var(--shadow-sm);
}

.nav-cta:hover {
  background-color: var(--secondary-dark);
  text-decoration: none;
}

.nav-cta-icon {
  width: 16px;
  height: 16px;
}
"#;
