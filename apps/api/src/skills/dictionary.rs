//! Curated skill → icon tables.
//!
//! ORDER IS LOAD-BEARING. Matching is substring containment, first hit wins,
//! so a key must appear before any later key it is a substring of
//! (`"react native"` before `"react"`, `"javascript"` before `"java"`,
//! `"postgresql"` before `"sql"`). `test_every_rule_is_reachable` enforces this.

use crate::skills::icons::{BrandIcon, GeneralIcon, IconRef};

/// One dictionary entry: if the normalized label contains `match_key`, use `icon`/`color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillIconRule {
    pub match_key: &'static str,
    pub icon: IconRef,
    pub color: &'static str,
}

/// Coarse keyword group consulted only when no dictionary rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFallbackRule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub icon: IconRef,
    pub color: &'static str,
}

const fn brand(match_key: &'static str, icon: BrandIcon, color: &'static str) -> SkillIconRule {
    SkillIconRule {
        match_key,
        icon: IconRef::Brand(icon),
        color,
    }
}

const fn general(match_key: &'static str, icon: GeneralIcon, color: &'static str) -> SkillIconRule {
    SkillIconRule {
        match_key,
        icon: IconRef::General(icon),
        color,
    }
}

pub const DEFAULT_ICON: GeneralIcon = GeneralIcon::Code;
pub const DEFAULT_COLOR: &str = "text-gray-400";

pub static SKILL_DICTIONARY: &[SkillIconRule] = &[
    // ── Front-end frameworks ────────────────────────────────────────────────
    brand("react native", BrandIcon::React, "text-blue-400"),
    brand("redux", BrandIcon::Redux, "text-purple-500"),
    brand("next", BrandIcon::NextJs, "text-white"),
    brand("nuxt", BrandIcon::Nuxt, "text-green-400"),
    brand("vue", BrandIcon::Vue, "text-green-500"),
    brand("angular", BrandIcon::Angular, "text-red-500"),
    brand("svelte", BrandIcon::Svelte, "text-orange-500"),
    brand("react", BrandIcon::React, "text-cyan-400"),
    brand("three.js", BrandIcon::ThreeJs, "text-white"),
    brand("threejs", BrandIcon::ThreeJs, "text-white"),
    brand("d3", BrandIcon::D3, "text-orange-400"),
    // ── Languages & runtimes (JS family) ────────────────────────────────────
    brand("typescript", BrandIcon::TypeScript, "text-blue-500"),
    brand("javascript", BrandIcon::JavaScript, "text-yellow-400"),
    brand("nestjs", BrandIcon::NestJs, "text-red-500"),
    brand("node", BrandIcon::NodeJs, "text-green-500"),
    brand("deno", BrandIcon::Deno, "text-white"),
    brand("express", BrandIcon::Express, "text-gray-300"),
    // ── Markup, styling, tooling ───────────────────────────────────────────
    brand("html", BrandIcon::Html5, "text-orange-500"),
    brand("tailwind", BrandIcon::TailwindCss, "text-cyan-400"),
    brand("bootstrap", BrandIcon::Bootstrap, "text-purple-500"),
    brand("styled", BrandIcon::StyledComponents, "text-pink-400"),
    brand("sass", BrandIcon::Sass, "text-pink-500"),
    brand("scss", BrandIcon::Sass, "text-pink-500"),
    brand("css", BrandIcon::Css3, "text-blue-500"),
    brand("webpack", BrandIcon::Webpack, "text-blue-400"),
    brand("vite", BrandIcon::Vite, "text-purple-400"),
    brand("babel", BrandIcon::Babel, "text-yellow-400"),
    brand("eslint", BrandIcon::Eslint, "text-indigo-400"),
    brand("jest", BrandIcon::Jest, "text-red-400"),
    brand("cypress", BrandIcon::Cypress, "text-gray-300"),
    brand("selenium", BrandIcon::Selenium, "text-green-500"),
    brand("playwright", BrandIcon::Playwright, "text-green-400"),
    brand("mocha", BrandIcon::Mocha, "text-amber-600"),
    // ── Back-end & systems languages ───────────────────────────────────────
    brand("python", BrandIcon::Python, "text-yellow-400"),
    brand("django", BrandIcon::Django, "text-green-600"),
    brand("flask", BrandIcon::Flask, "text-gray-300"),
    brand("fastapi", BrandIcon::FastApi, "text-teal-400"),
    brand("rust", BrandIcon::Rust, "text-orange-400"),
    brand("golang", BrandIcon::Go, "text-cyan-500"),
    brand("kotlin", BrandIcon::Kotlin, "text-purple-500"),
    brand("swift", BrandIcon::Swift, "text-orange-500"),
    brand("flutter", BrandIcon::Flutter, "text-blue-400"),
    brand("dart", BrandIcon::Dart, "text-blue-500"),
    brand("android", BrandIcon::Android, "text-green-500"),
    general("java", GeneralIcon::Java, "text-red-500"),
    brand("laravel", BrandIcon::Laravel, "text-red-500"),
    brand("php", BrandIcon::Php, "text-indigo-400"),
    brand("ruby on rails", BrandIcon::RubyOnRails, "text-red-600"),
    brand("rails", BrandIcon::RubyOnRails, "text-red-600"),
    brand("ruby", BrandIcon::Ruby, "text-red-500"),
    brand("c#", BrandIcon::CSharp, "text-purple-500"),
    brand("csharp", BrandIcon::CSharp, "text-purple-500"),
    brand("asp.net", BrandIcon::DotNet, "text-purple-600"),
    brand(".net", BrandIcon::DotNet, "text-purple-600"),
    brand("dotnet", BrandIcon::DotNet, "text-purple-600"),
    brand("c++", BrandIcon::Cplusplus, "text-blue-600"),
    brand("cpp", BrandIcon::Cplusplus, "text-blue-600"),
    brand("scala", BrandIcon::Scala, "text-red-500"),
    brand("elixir", BrandIcon::Elixir, "text-purple-400"),
    brand("haskell", BrandIcon::Haskell, "text-purple-500"),
    brand("perl", BrandIcon::Perl, "text-blue-400"),
    brand("julia", BrandIcon::Julia, "text-purple-400"),
    brand("matlab", BrandIcon::Matlab, "text-orange-500"),
    // ── Web3 ───────────────────────────────────────────────────────────────
    brand("solidity", BrandIcon::Solidity, "text-gray-300"),
    brand("web3", BrandIcon::Web3, "text-orange-400"),
    general("ethereum", GeneralIcon::Ethereum, "text-indigo-400"),
    general("blockchain", GeneralIcon::Ethereum, "text-indigo-400"),
    // ── APIs ───────────────────────────────────────────────────────────────
    brand("graphql", BrandIcon::GraphQl, "text-pink-500"),
    brand("apollo", BrandIcon::Apollo, "text-indigo-400"),
    general("rest api", GeneralIcon::Server, "text-green-400"),
    general("microservice", GeneralIcon::Cubes, "text-indigo-400"),
    // ── Databases ──────────────────────────────────────────────────────────
    brand("mongo", BrandIcon::MongoDb, "text-green-500"),
    brand("postgresql", BrandIcon::PostgreSql, "text-blue-400"),
    brand("postgres", BrandIcon::PostgreSql, "text-blue-400"),
    brand("mysql", BrandIcon::MySql, "text-blue-500"),
    brand("sqlite", BrandIcon::Sqlite, "text-blue-300"),
    brand("sql server", BrandIcon::MicrosoftSqlServer, "text-red-500"),
    brand("mssql", BrandIcon::MicrosoftSqlServer, "text-red-500"),
    general("nosql", GeneralIcon::Database, "text-green-400"),
    brand("oracle", BrandIcon::Oracle, "text-red-600"),
    general("sql", GeneralIcon::Database, "text-blue-300"),
    brand("redis", BrandIcon::Redis, "text-red-500"),
    brand("elasticsearch", BrandIcon::Elasticsearch, "text-yellow-400"),
    brand("cassandra", BrandIcon::Cassandra, "text-blue-400"),
    brand("dynamodb", BrandIcon::DynamoDb, "text-blue-500"),
    brand("supabase", BrandIcon::Supabase, "text-green-400"),
    brand("prisma", BrandIcon::Prisma, "text-teal-300"),
    brand("firebase", BrandIcon::Firebase, "text-yellow-500"),
    // ── Cloud & hosting ────────────────────────────────────────────────────
    brand("aws lambda", BrandIcon::AwsLambda, "text-orange-400"),
    brand("lambda", BrandIcon::AwsLambda, "text-orange-400"),
    brand("amazon s3", BrandIcon::AmazonS3, "text-red-400"),
    general("amazon web services", GeneralIcon::Aws, "text-orange-400"),
    general("aws", GeneralIcon::Aws, "text-orange-400"),
    brand("google cloud", BrandIcon::GoogleCloud, "text-blue-400"),
    brand("gcp", BrandIcon::GoogleCloud, "text-blue-400"),
    brand("azure", BrandIcon::Azure, "text-blue-500"),
    brand("heroku", BrandIcon::Heroku, "text-purple-500"),
    brand("vercel", BrandIcon::Vercel, "text-white"),
    brand("netlify", BrandIcon::Netlify, "text-teal-400"),
    brand("digitalocean", BrandIcon::DigitalOcean, "text-blue-500"),
    brand("digital ocean", BrandIcon::DigitalOcean, "text-blue-500"),
    general("digital marketing", GeneralIcon::Bullhorn, "text-amber-400"),
    // ── DevOps & version control ───────────────────────────────────────────
    brand("docker", BrandIcon::Docker, "text-blue-500"),
    brand("kubernetes", BrandIcon::Kubernetes, "text-blue-500"),
    brand("k8s", BrandIcon::Kubernetes, "text-blue-500"),
    brand("terraform", BrandIcon::Terraform, "text-purple-500"),
    brand("ansible", BrandIcon::Ansible, "text-red-500"),
    brand("jenkins", BrandIcon::Jenkins, "text-red-400"),
    brand("github actions", BrandIcon::GithubActions, "text-blue-400"),
    brand("circleci", BrandIcon::CircleCi, "text-gray-300"),
    brand("github", BrandIcon::Github, "text-gray-300"),
    brand("gitlab", BrandIcon::Gitlab, "text-orange-500"),
    brand("bitbucket", BrandIcon::Bitbucket, "text-blue-500"),
    brand("git", BrandIcon::Git, "text-orange-600"),
    brand("nginx", BrandIcon::Nginx, "text-green-500"),
    brand("kafka", BrandIcon::ApacheKafka, "text-gray-300"),
    brand("rabbitmq", BrandIcon::RabbitMq, "text-orange-500"),
    brand("apache", BrandIcon::Apache, "text-red-500"),
    // ── Operating systems & shells ─────────────────────────────────────────
    brand("ubuntu", BrandIcon::Ubuntu, "text-orange-500"),
    brand("linux", BrandIcon::Linux, "text-yellow-400"),
    brand("powershell", BrandIcon::Powershell, "text-blue-400"),
    brand("bash", BrandIcon::GnuBash, "text-green-400"),
    brand("shell", BrandIcon::GnuBash, "text-green-400"),
    general("command line", GeneralIcon::Terminal, "text-green-400"),
    general("windows", GeneralIcon::Windows, "text-blue-400"),
    general("macos", GeneralIcon::Apple, "text-gray-300"),
    brand("ios", BrandIcon::Ios, "text-gray-300"),
    // ── ML & data ──────────────────────────────────────────────────────────
    brand("tensorflow", BrandIcon::TensorFlow, "text-orange-500"),
    brand("pytorch", BrandIcon::PyTorch, "text-orange-600"),
    brand("keras", BrandIcon::Keras, "text-red-500"),
    brand("scikit", BrandIcon::ScikitLearn, "text-orange-400"),
    brand("sklearn", BrandIcon::ScikitLearn, "text-orange-400"),
    brand("pandas", BrandIcon::Pandas, "text-indigo-400"),
    brand("numpy", BrandIcon::NumPy, "text-blue-400"),
    brand("opencv", BrandIcon::OpenCv, "text-green-500"),
    brand("jupyter", BrandIcon::Jupyter, "text-orange-500"),
    brand("hugging face", BrandIcon::HuggingFace, "text-yellow-400"),
    brand("huggingface", BrandIcon::HuggingFace, "text-yellow-400"),
    brand("openai", BrandIcon::OpenAi, "text-emerald-400"),
    brand("chatgpt", BrandIcon::OpenAi, "text-emerald-400"),
    brand("langchain", BrandIcon::LangChain, "text-teal-400"),
    brand("tableau", BrandIcon::Tableau, "text-blue-400"),
    brand("power bi", BrandIcon::PowerBi, "text-yellow-500"),
    general("excel", GeneralIcon::FileExcel, "text-green-600"),
    // ── Design & creative ──────────────────────────────────────────────────
    brand("figma", BrandIcon::Figma, "text-purple-400"),
    brand("adobe xd", BrandIcon::AdobeXd, "text-pink-500"),
    brand("photoshop", BrandIcon::AdobePhotoshop, "text-blue-400"),
    brand("illustrator", BrandIcon::AdobeIllustrator, "text-orange-500"),
    brand("after effects", BrandIcon::AdobeAfterEffects, "text-purple-500"),
    brand("premiere", BrandIcon::AdobePremierePro, "text-purple-400"),
    brand("sketch", BrandIcon::Sketch, "text-yellow-500"),
    brand("canva", BrandIcon::Canva, "text-cyan-400"),
    brand("blender", BrandIcon::Blender, "text-orange-500"),
    general("ui/ux", GeneralIcon::PencilRuler, "text-rose-400"),
    general("community", GeneralIcon::Users, "text-amber-400"),
    brand("unity", BrandIcon::Unity, "text-gray-300"),
    brand("unreal", BrandIcon::UnrealEngine, "text-gray-300"),
    // ── Productivity & platforms ───────────────────────────────────────────
    brand("jira", BrandIcon::Jira, "text-blue-500"),
    brand("confluence", BrandIcon::Confluence, "text-blue-400"),
    brand("notion", BrandIcon::Notion, "text-gray-300"),
    brand("slack", BrandIcon::Slack, "text-purple-400"),
    brand("trello", BrandIcon::Trello, "text-blue-400"),
    brand("postman", BrandIcon::Postman, "text-orange-500"),
    brand("visual studio code", BrandIcon::VisualStudioCode, "text-blue-500"),
    brand("vs code", BrandIcon::VisualStudioCode, "text-blue-500"),
    brand("vscode", BrandIcon::VisualStudioCode, "text-blue-500"),
    brand("visual studio", BrandIcon::VisualStudio, "text-purple-500"),
    brand("pnpm", BrandIcon::Pnpm, "text-yellow-500"),
    brand("yarn", BrandIcon::Yarn, "text-blue-400"),
    brand("npm", BrandIcon::Npm, "text-red-500"),
    brand("stripe", BrandIcon::Stripe, "text-indigo-400"),
    brand("shopify", BrandIcon::Shopify, "text-green-500"),
    brand("wordpress", BrandIcon::WordPress, "text-blue-500"),
    brand("webflow", BrandIcon::Webflow, "text-blue-500"),
    general("microsoft", GeneralIcon::Microsoft, "text-blue-400"),
];

// Evaluated in order; on compound labels the earlier category wins
// ("cloud database" is a database skill).
pub static CATEGORY_FALLBACKS: &[CategoryFallbackRule] = &[
    CategoryFallbackRule {
        category: "ai_ml",
        keywords: &[
            "machine learning",
            "deep learning",
            "neural",
            "artificial intelligence",
            "nlp",
            "natural language",
            "computer vision",
            "llm",
            "data science",
        ],
        icon: IconRef::General(GeneralIcon::Brain),
        color: "text-pink-400",
    },
    CategoryFallbackRule {
        category: "database",
        keywords: &["database", "data warehouse", "etl", "query"],
        icon: IconRef::General(GeneralIcon::Database),
        color: "text-blue-400",
    },
    CategoryFallbackRule {
        category: "cloud",
        keywords: &["cloud", "serverless", "devops", "hosting", "deploy", "infrastructure"],
        icon: IconRef::General(GeneralIcon::Cloud),
        color: "text-sky-400",
    },
    CategoryFallbackRule {
        category: "mobile",
        keywords: &["mobile", "app development", "smartphone", "tablet"],
        icon: IconRef::General(GeneralIcon::MobileAlt),
        color: "text-green-400",
    },
    CategoryFallbackRule {
        category: "design",
        keywords: &[
            "design",
            "ux",
            "wireframe",
            "prototyp",
            "typography",
            "graphic",
            "illustration",
            "animation",
        ],
        icon: IconRef::General(GeneralIcon::PaintBrush),
        color: "text-rose-400",
    },
    CategoryFallbackRule {
        category: "security",
        keywords: &[
            "security",
            "cyber",
            "penetration",
            "encryption",
            "authentication",
            "oauth",
            "firewall",
        ],
        icon: IconRef::General(GeneralIcon::ShieldAlt),
        color: "text-red-400",
    },
    CategoryFallbackRule {
        category: "testing",
        keywords: &["test", "qa", "quality assurance", "debugging"],
        icon: IconRef::General(GeneralIcon::Vial),
        color: "text-lime-400",
    },
    CategoryFallbackRule {
        category: "analytics",
        keywords: &[
            "analytics",
            "data",
            "statistics",
            "visualization",
            "visualisation",
            "dashboard",
            "reporting",
        ],
        icon: IconRef::General(GeneralIcon::ChartBar),
        color: "text-yellow-400",
    },
    CategoryFallbackRule {
        category: "web",
        keywords: &[
            "web",
            "frontend",
            "front-end",
            "backend",
            "back-end",
            "full stack",
            "fullstack",
            "api",
            "server",
            "network",
            "programming",
            "software",
        ],
        icon: IconRef::General(GeneralIcon::Globe),
        color: "text-cyan-400",
    },
    CategoryFallbackRule {
        category: "soft_skills",
        keywords: &[
            "leadership",
            "communication",
            "team",
            "management",
            "agile",
            "scrum",
            "mentor",
            "collaboration",
            "public speaking",
            "problem solving",
        ],
        icon: IconRef::General(GeneralIcon::Users),
        color: "text-amber-400",
    },
    CategoryFallbackRule {
        category: "marketing",
        keywords: &["marketing", "seo", "content", "social media", "branding", "copywriting"],
        icon: IconRef::General(GeneralIcon::Bullhorn),
        color: "text-orange-400",
    },
];
