pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand palette */
  --primary: #6D28D9;          /* Brightfold violet */
  --primary-light: #8B5CF6;
  --primary-dark: #5B21B6;
  --secondary: #F59E0B;        /* Amber accent */
  --secondary-dark: #D97706;
  --tertiary: #0EA5E9;

  /* Neutrals */
  --neutral-50: #FAFAF9;
  --neutral-100: #F5F5F4;
  --neutral-200: #E7E5E4;
  --neutral-300: #D6D3D1;
  --neutral-400: #A8A29E;
  --neutral-500: #78716C;
  --neutral-600: #57534E;
  --neutral-700: #44403C;
  --neutral-800: #292524;
  --neutral-900: #1C1917;

  /* Surfaces */
  --background: var(--neutral-100);
  --surface: #FFFFFF;
  --surface-translucent: rgba(255, 255, 255, 0.72);
  --card-background: #FFFFFF;

  /* Text */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Borders */
  --border: var(--neutral-200);
  --border-dimmed: rgba(28, 25, 23, 0.08);

  /* Layout */
  --header-height: 80px;
  --container-width: 1280px;

  /* Spacing */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Radius */
  --radius-md: 6px;
  --radius-lg: 10px;
  --radius-xl: 16px;
  --radius-2xl: 24px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Motion */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-slow: 400ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

[data-theme="dark"] {
  --background: #121212;
  --surface: var(--neutral-900);
  --surface-translucent: rgba(28, 25, 23, 0.72);
  --card-background: var(--neutral-800);

  --text-primary: var(--neutral-50);
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);

  --border: var(--neutral-700);
  --border-dimmed: rgba(250, 250, 249, 0.08);
}
"#;
