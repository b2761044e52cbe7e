//! Next-steps guidance printed once the project is set up.

use std::fmt;

const RULE_WIDTH: usize = 60;

const NEXT_STEPS: [&str; 4] = [
    "flutter pub get",
    "flutter packages pub run build_runner build",
    "flutter pub run flutter_native_splash:create",
    "flutter run",
];

const CONFIGURATION_HINTS: [&str; 3] = [
    "Update .env file with your API keys and settings",
    "Replace splash screen images in assets/images/",
    "Customize colors in pubspec.yaml flutter_native_splash section",
];

const FEATURES: [&str; 13] = [
    "Clean Architecture (Domain, Data, Presentation)",
    "BLoC State Management",
    "Dependency Injection (get_it + injectable)",
    "Local Storage (Hive)",
    "Network Layer (Dio + Retrofit)",
    "Environment Configuration (Envied)",
    "Native Splash Screens",
    "Responsive Design (ScreenUtil)",
    "Form Validation (Formz)",
    "Flutter Hooks",
    "Advanced Logging (Talker)",
    "Navigation (GoRouter)",
    "Internationalization (EasyLocalization)",
];

/// Human-readable summary of what to do after generation.
#[derive(Debug, Clone, Copy)]
pub struct NextSteps<'a> {
    pub project_name: &'a str,
    pub project_slug: &'a str,
}

impl fmt::Display for NextSteps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "🎉 {} Flutter project created successfully!", self.project_name)?;
        writeln!(f, "{rule}")?;

        writeln!(f, "\n📋 Next Steps:")?;
        writeln!(f, "1. cd {}", self.project_slug)?;
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            writeln!(f, "{}. {step}", i + 2)?;
        }

        writeln!(f, "\n🔧 Configuration:")?;
        for hint in CONFIGURATION_HINTS {
            writeln!(f, "• {hint}")?;
        }

        writeln!(f, "\n📚 Architecture Features:")?;
        for feature in FEATURES {
            writeln!(f, "• ✅ {feature}")?;
        }

        writeln!(f, "\n🚀 Happy Coding!")?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_steps_mentions_project() {
        let text =
            NextSteps { project_name: "Demo App", project_slug: "demo_app" }.to_string();

        assert!(text.contains("🎉 Demo App Flutter project created successfully!"));
        assert!(text.contains("1. cd demo_app"));
        assert!(text.contains("5. flutter run"));
        assert!(text.ends_with(&"=".repeat(RULE_WIDTH)));
    }
}
