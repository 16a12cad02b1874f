pub const PAGE_STYLES: &str = r#"
/* Page shell */

.site-main {
  flex: 1;
  padding-top: var(--header-height);
}

.page-layout {
  padding: var(--space-16) var(--space-4) var(--space-12);
  max-width: var(--container-width);
  margin: 0 auto;
}

.page-title {
  font-size: 2rem;
  font-weight: 600;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-8);
}

/* Hero */

.hero {
  padding: var(--space-24) 0 var(--space-16);
  text-align: center;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 800;
  letter-spacing: -0.03em;
  color: var(--text-primary);
}

.hero-highlight {
  color: var(--primary);
}

.hero-subtitle {
  margin: var(--space-6) auto 0;
  max-width: 36rem;
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.hero-actions {
  margin-top: var(--space-8);
  display: flex;
  justify-content: center;
  gap: var(--space-4);
}

/* About */

.about-section {
  padding: var(--space-16) 0;
}

.about-grid {
  margin-top: var(--space-12);
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-6);
}

@media (min-width: 768px) {
  .about-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

.about-card {
  overflow: hidden;
  border-radius: var(--radius-xl);
  background-color: var(--card-background);
  box-shadow: var(--shadow-md);
}

.about-card-accent {
  height: 6px;
  width: 100%;
}

.about-card-body {
  padding: var(--space-6);
}

.about-card-heading {
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--primary);
  margin-bottom: var(--space-2);
}

.about-card-text {
  color: var(--text-secondary);
}

/* Services */

.services-section {
  padding: var(--space-16) 0;
}

.services-grid {
  margin-top: var(--space-12);
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-6);
}

@media (min-width: 768px) {
  .services-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (min-width: 1024px) {
  .services-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

.service-card {
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border-radius: var(--radius-xl);
  background-color: var(--card-background);
  box-shadow: var(--shadow-md);
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.service-card:hover {
  box-shadow: var(--shadow-lg);
}

.service-card-accent {
  height: 6px;
  width: 100%;
}

.service-card-body {
  padding: var(--space-6);
}

.service-card-title {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--primary);
}

.service-card-tagline {
  margin-top: var(--space-1);
  font-weight: 500;
  color: var(--text-primary);
}

.service-card-blurb {
  margin-top: var(--space-2);
  color: var(--text-secondary);
}

.service-card-link {
  display: inline-block;
  margin-top: var(--space-4);
  font-weight: 500;
  color: var(--primary);
}

.service-detail-tagline {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

/* Contact */

.contact-section {
  padding: var(--space-16) 0 var(--space-24);
}

.contact-grid {
  margin-top: var(--space-12);
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-12);
}

@media (min-width: 1024px) {
  .contact-grid {
    grid-template-columns: 1fr 2fr;
  }
}

.contact-channels {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.contact-channel {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--card-background);
  box-shadow: var(--shadow-md);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.contact-channel:hover {
  transform: translateX(8px);
}

.contact-channel-glyph {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--background);
}

.contact-channel-icon {
  width: 24px;
  height: 24px;
  color: var(--primary);
}

.contact-form-panel {
  padding: var(--space-8);
  border-radius: var(--radius-lg);
  background-color: var(--card-background);
  box-shadow: var(--shadow-lg);
}

.contact-form-heading {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

/* Footer */

.site-footer {
  border-top: 1px solid var(--border);
  background-color: var(--surface);
}

.footer-inner {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  padding-top: var(--space-8);
  padding-bottom: var(--space-8);
}

.footer-brand {
  font-weight: 600;
}

.footer-links {
  display: flex;
  gap: var(--space-6);
}

.footer-links a {
  color: var(--text-secondary);
}

.footer-note {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

/* Not found */

.not-found {
  min-height: 70vh;
  display: grid;
  place-items: center;
  text-align: center;
}

.not-found-code {
  font-weight: 600;
  color: var(--primary);
}

.not-found-title {
  margin-top: var(--space-4);
  font-size: 3rem;
  font-weight: 600;
  letter-spacing: -0.02em;
}

.not-found-text {
  margin-top: var(--space-6);
  color: var(--text-secondary);
  font-size: 1.125rem;
}

.not-found-actions {
  margin-top: var(--space-8);
}
"#;
