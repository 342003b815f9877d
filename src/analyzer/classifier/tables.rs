//! Built-in classification tables.
//!
//! Order matters in the pattern and directory tables: the first hit wins.

use crate::types::Provenance::{self, *};

/// (key, provenance, label)
pub type TableEntry = (&'static str, Provenance, &'static str);

/// Exact, case-sensitive file names
pub static KNOWN_FILES: &[TableEntry] = &[
    // System / VCS / environment
    (".gitignore", System, "Git ignore rules"),
    (".gitattributes", System, "Git attributes"),
    (".gitmodules", System, "Git submodules"),
    (".env", System, "Environment variables"),
    (".DS_Store", System, "macOS Finder metadata"),
    ("Thumbs.db", System, "Windows thumbnail cache"),
    (".nvmrc", System, "Node.js version pin"),
    (".node-version", System, "Node.js version pin"),
    (".python-version", System, "Python version pin"),
    (".tool-versions", System, "asdf tool versions"),
    ("rust-toolchain.toml", System, "Rust toolchain pin"),
    ("rust-toolchain", System, "Rust toolchain pin"),
    // Package managers
    ("package.json", PackageManager, "npm package manifest"),
    ("package-lock.json", PackageManager, "npm lockfile"),
    ("npm-shrinkwrap.json", PackageManager, "npm lockfile"),
    ("yarn.lock", PackageManager, "Yarn lockfile"),
    ("pnpm-lock.yaml", PackageManager, "pnpm lockfile"),
    ("pnpm-workspace.yaml", PackageManager, "pnpm workspace"),
    ("bun.lockb", PackageManager, "Bun lockfile"),
    (".npmrc", PackageManager, "npm settings"),
    (".yarnrc.yml", PackageManager, "Yarn settings"),
    ("Cargo.toml", PackageManager, "Cargo manifest"),
    ("Cargo.lock", PackageManager, "Cargo lockfile"),
    ("go.mod", PackageManager, "Go module definition"),
    ("go.sum", PackageManager, "Go module checksums"),
    ("pyproject.toml", PackageManager, "Python project metadata"),
    ("requirements.txt", PackageManager, "pip requirements"),
    ("Pipfile", PackageManager, "Pipenv manifest"),
    ("Pipfile.lock", PackageManager, "Pipenv lockfile"),
    ("poetry.lock", PackageManager, "Poetry lockfile"),
    ("setup.py", PackageManager, "setuptools script"),
    ("setup.cfg", PackageManager, "setuptools config"),
    ("Gemfile", PackageManager, "Bundler manifest"),
    ("Gemfile.lock", PackageManager, "Bundler lockfile"),
    ("composer.json", PackageManager, "Composer manifest"),
    ("composer.lock", PackageManager, "Composer lockfile"),
    // Framework and compiler tooling
    ("tsconfig.json", FrameworkTool, "TypeScript compiler config"),
    ("jsconfig.json", FrameworkTool, "JavaScript project config"),
    ("next.config.js", FrameworkTool, "Next.js config"),
    ("next.config.mjs", FrameworkTool, "Next.js config"),
    ("next.config.ts", FrameworkTool, "Next.js config"),
    ("nuxt.config.ts", FrameworkTool, "Nuxt config"),
    ("vite.config.ts", FrameworkTool, "Vite config"),
    ("vite.config.js", FrameworkTool, "Vite config"),
    ("webpack.config.js", FrameworkTool, "webpack config"),
    ("rollup.config.js", FrameworkTool, "Rollup config"),
    ("svelte.config.js", FrameworkTool, "SvelteKit config"),
    ("astro.config.mjs", FrameworkTool, "Astro config"),
    ("remix.config.js", FrameworkTool, "Remix config"),
    ("gatsby-config.js", FrameworkTool, "Gatsby config"),
    ("vue.config.js", FrameworkTool, "Vue CLI config"),
    ("angular.json", FrameworkTool, "Angular workspace"),
    ("nest-cli.json", FrameworkTool, "NestJS CLI config"),
    ("tailwind.config.js", FrameworkTool, "Tailwind CSS config"),
    ("tailwind.config.ts", FrameworkTool, "Tailwind CSS config"),
    ("postcss.config.js", FrameworkTool, "PostCSS config"),
    ("babel.config.js", FrameworkTool, "Babel config"),
    (".babelrc", FrameworkTool, "Babel config"),
    ("app.json", FrameworkTool, "Expo app config"),
    ("manage.py", FrameworkTool, "Django management script"),
    ("turbo.json", FrameworkTool, "Turborepo pipeline"),
    ("nx.json", FrameworkTool, "Nx workspace"),
    ("lerna.json", FrameworkTool, "Lerna monorepo config"),
    // Build tooling
    ("Makefile", BuildTool, "Make build script"),
    ("CMakeLists.txt", BuildTool, "CMake project"),
    ("build.gradle", BuildTool, "Gradle build"),
    ("build.gradle.kts", BuildTool, "Gradle build (Kotlin DSL)"),
    ("settings.gradle", BuildTool, "Gradle settings"),
    ("pom.xml", BuildTool, "Maven project"),
    ("build.rs", BuildTool, "Cargo build script"),
    ("justfile", BuildTool, "just recipes"),
    ("Taskfile.yml", BuildTool, "Task runner config"),
    ("meson.build", BuildTool, "Meson build"),
    ("BUILD.bazel", BuildTool, "Bazel build"),
    ("WORKSPACE", BuildTool, "Bazel workspace"),
    // Linters and formatters
    (".eslintrc", Linter, "ESLint config"),
    ("eslint.config.js", Linter, "ESLint flat config"),
    ("eslint.config.mjs", Linter, "ESLint flat config"),
    (".prettierrc", Linter, "Prettier config"),
    ("prettier.config.js", Linter, "Prettier config"),
    ("biome.json", Linter, "Biome config"),
    ("rustfmt.toml", Linter, "rustfmt config"),
    ("clippy.toml", Linter, "Clippy config"),
    (".flake8", Linter, "Flake8 config"),
    ("ruff.toml", Linter, "Ruff config"),
    (".pylintrc", Linter, "Pylint config"),
    ("mypy.ini", Linter, "mypy config"),
    (".golangci.yml", Linter, "golangci-lint config"),
    (".rubocop.yml", Linter, "RuboCop config"),
    (".pre-commit-config.yaml", Linter, "pre-commit hooks"),
    ("commitlint.config.js", Linter, "commitlint config"),
    (".lintstagedrc", Linter, "lint-staged config"),
    // Testing
    ("jest.config.js", Testing, "Jest config"),
    ("jest.config.ts", Testing, "Jest config"),
    ("vitest.config.ts", Testing, "Vitest config"),
    ("playwright.config.ts", Testing, "Playwright config"),
    ("cypress.config.ts", Testing, "Cypress config"),
    ("cypress.json", Testing, "Cypress config"),
    ("karma.conf.js", Testing, "Karma config"),
    ("pytest.ini", Testing, "pytest config"),
    ("tox.ini", Testing, "tox environments"),
    (".mocharc.yml", Testing, "Mocha config"),
    ("codecov.yml", Testing, "Codecov config"),
    // CI and hosting
    (".gitlab-ci.yml", Ci, "GitLab CI pipeline"),
    (".travis.yml", Ci, "Travis CI config"),
    ("azure-pipelines.yml", Ci, "Azure Pipelines"),
    ("Jenkinsfile", Ci, "Jenkins pipeline"),
    ("bitbucket-pipelines.yml", Ci, "Bitbucket Pipelines"),
    ("appveyor.yml", Ci, "AppVeyor config"),
    ("netlify.toml", Ci, "Netlify deploy config"),
    ("vercel.json", Ci, "Vercel deploy config"),
    // Containers and deployment
    ("Dockerfile", Container, "Docker image"),
    (".dockerignore", Container, "Docker build context rules"),
    ("docker-compose.yml", Container, "Docker Compose services"),
    ("docker-compose.yaml", Container, "Docker Compose services"),
    ("compose.yml", Container, "Docker Compose services"),
    ("compose.yaml", Container, "Docker Compose services"),
    ("Procfile", Container, "Process types"),
    ("fly.toml", Container, "Fly.io app config"),
    ("skaffold.yaml", Container, "Skaffold pipeline"),
    ("Vagrantfile", Container, "Vagrant machine"),
    // Editor
    (".editorconfig", Editor, "EditorConfig rules"),
    // Documentation
    ("README.md", Documentation, "Project readme"),
    ("LICENSE", Documentation, "License"),
    ("CHANGELOG.md", Documentation, "Changelog"),
    ("CONTRIBUTING.md", Documentation, "Contribution guide"),
    ("CODE_OF_CONDUCT.md", Documentation, "Code of conduct"),
    ("SECURITY.md", Documentation, "Security policy"),
];

/// Glob patterns over file names, tried after the exact table
pub static FILE_PATTERNS: &[TableEntry] = &[
    (".env.*", System, "Environment variables"),
    ("tsconfig.*.json", FrameworkTool, "TypeScript project config"),
    (".eslintrc.*", Linter, "ESLint config"),
    (".prettierrc.*", Linter, "Prettier config"),
    (".stylelintrc*", Linter, "Stylelint config"),
    ("stylelint.config.*", Linter, "Stylelint config"),
    ("jest.config.*", Testing, "Jest config"),
    ("vitest.config.*", Testing, "Vitest config"),
    ("Dockerfile.*", Container, "Docker image"),
    ("*.dockerfile", Container, "Docker image"),
    ("docker-compose.*.yml", Container, "Docker Compose override"),
    ("docker-compose.*.yaml", Container, "Docker Compose override"),
    ("requirements*.txt", PackageManager, "pip requirements"),
    ("*.lock", PackageManager, "Lockfile"),
    ("*.gemspec", PackageManager, "RubyGems spec"),
    ("*.csproj", BuildTool, "MSBuild project"),
    ("*.sln", BuildTool, "Visual Studio solution"),
    ("*.code-workspace", Editor, "VS Code workspace"),
    ("README*", Documentation, "Project readme"),
    ("LICENSE*", Documentation, "License"),
    ("CHANGELOG*", Documentation, "Changelog"),
    ("*.config.js", FrameworkTool, "Tool config"),
    ("*.config.mjs", FrameworkTool, "Tool config"),
    ("*.config.cjs", FrameworkTool, "Tool config"),
    ("*.config.ts", FrameworkTool, "Tool config"),
    ("*.config.mts", FrameworkTool, "Tool config"),
    ("*.config.json", FrameworkTool, "Tool config"),
    ("*.toml", Custom, "Custom configuration"),
    ("*.ini", Custom, "Custom configuration"),
    ("*.cfg", Custom, "Custom configuration"),
    ("*.conf", Custom, "Custom configuration"),
    ("*.properties", Custom, "Custom configuration"),
    ("*.yaml", Custom, "Custom configuration"),
    ("*.yml", Custom, "Custom configuration"),
];

/// Lowercase substrings of directory names
pub static DIRECTORY_SUBSTRINGS: &[TableEntry] = &[
    (".github", Ci, "GitHub workflows and metadata"),
    (".gitlab", Ci, "GitLab CI includes"),
    (".circleci", Ci, "CircleCI config"),
    ("workflows", Ci, "CI workflows"),
    (".vscode", Editor, "VS Code workspace settings"),
    (".idea", Editor, "JetBrains project settings"),
    (".husky", Linter, "Git hooks (husky)"),
    (".storybook", FrameworkTool, "Storybook config"),
    (".next", FrameworkTool, "Next.js build output"),
    (".nuxt", FrameworkTool, "Nuxt build output"),
    ("migration", FrameworkTool, "Database migrations"),
    ("__tests__", Testing, "Test suite"),
    ("test", Testing, "Test suite"),
    ("spec", Testing, "Test specs"),
    ("e2e", Testing, "End-to-end tests"),
    ("fixture", Testing, "Test fixtures"),
    ("mock", Testing, "Test mocks"),
    ("docker", Container, "Container definitions"),
    ("k8s", Container, "Kubernetes manifests"),
    ("kubernetes", Container, "Kubernetes manifests"),
    ("helm", Container, "Helm charts"),
    ("terraform", Custom, "Infrastructure as code"),
    ("infra", Custom, "Infrastructure code"),
    ("config", Custom, "Configuration directory"),
    ("setting", Custom, "Settings directory"),
    ("script", Custom, "Project scripts"),
    ("tool", Custom, "Project tooling"),
    ("doc", Documentation, "Documentation"),
    ("public", FrameworkTool, "Static assets"),
    ("static", FrameworkTool, "Static assets"),
    ("asset", FrameworkTool, "Static assets"),
    ("component", FrameworkTool, "UI components"),
    ("layout", FrameworkTool, "UI layouts"),
    ("page", FrameworkTool, "Route pages"),
    ("hook", FrameworkTool, "UI hooks"),
    ("style", FrameworkTool, "Stylesheets"),
    ("dist", BuildTool, "Build output"),
    ("build", BuildTool, "Build output"),
];
