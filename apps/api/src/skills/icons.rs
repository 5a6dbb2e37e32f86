//! Closed icon namespaces referenced by the skill dictionary.
//!
//! The front-end resolves symbols by name from two icon libraries: a
//! general-purpose set (`Fa*`) and a brand/technology set (`Si*`). Modelling
//! both as enums means every dictionary entry points at a symbol that exists.

use serde::{Serialize, Serializer};

macro_rules! icon_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $symbol:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Symbol name exported by the icon library.
            pub fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)+
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.symbol())
            }
        }
    };
}

icon_set! {
    /// Icon set A: general-purpose glyphs, also used by the category fallbacks.
    GeneralIcon {
        Code => "FaCode",
        Brain => "FaBrain",
        Database => "FaDatabase",
        Cloud => "FaCloud",
        MobileAlt => "FaMobileAlt",
        PaintBrush => "FaPaintBrush",
        ShieldAlt => "FaShieldAlt",
        Vial => "FaVial",
        ChartBar => "FaChartBar",
        Globe => "FaGlobe",
        Users => "FaUsers",
        Server => "FaServer",
        Terminal => "FaTerminal",
        Bullhorn => "FaBullhorn",
        PencilRuler => "FaPencilRuler",
        Cubes => "FaCubes",
        FileExcel => "FaFileExcel",
        Java => "FaJava",
        Aws => "FaAws",
        Microsoft => "FaMicrosoft",
        Windows => "FaWindows",
        Apple => "FaApple",
        Ethereum => "FaEthereum",
    }
}

icon_set! {
    /// Icon set B: brand and technology logos.
    BrandIcon {
        React => "SiReact",
        Redux => "SiRedux",
        NextJs => "SiNextdotjs",
        Nuxt => "SiNuxtdotjs",
        Vue => "SiVuedotjs",
        Angular => "SiAngular",
        Svelte => "SiSvelte",
        JavaScript => "SiJavascript",
        TypeScript => "SiTypescript",
        NodeJs => "SiNodedotjs",
        Deno => "SiDeno",
        Express => "SiExpress",
        NestJs => "SiNestjs",
        Html5 => "SiHtml5",
        Sass => "SiSass",
        TailwindCss => "SiTailwindcss",
        Bootstrap => "SiBootstrap",
        Css3 => "SiCss3",
        StyledComponents => "SiStyledcomponents",
        Webpack => "SiWebpack",
        Vite => "SiVite",
        Babel => "SiBabel",
        Eslint => "SiEslint",
        Jest => "SiJest",
        Cypress => "SiCypress",
        Selenium => "SiSelenium",
        Playwright => "SiPlaywright",
        Mocha => "SiMocha",
        Python => "SiPython",
        Django => "SiDjango",
        Flask => "SiFlask",
        FastApi => "SiFastapi",
        Rust => "SiRust",
        Go => "SiGo",
        Kotlin => "SiKotlin",
        Swift => "SiSwift",
        Flutter => "SiFlutter",
        Dart => "SiDart",
        Android => "SiAndroid",
        Ios => "SiIos",
        Php => "SiPhp",
        Laravel => "SiLaravel",
        RubyOnRails => "SiRubyonrails",
        Ruby => "SiRuby",
        CSharp => "SiCsharp",
        DotNet => "SiDotnet",
        Cplusplus => "SiCplusplus",
        Scala => "SiScala",
        Elixir => "SiElixir",
        Haskell => "SiHaskell",
        Perl => "SiPerl",
        Julia => "SiJulia",
        Solidity => "SiSolidity",
        Web3 => "SiWeb3dotjs",
        GraphQl => "SiGraphql",
        Apollo => "SiApollographql",
        MongoDb => "SiMongodb",
        PostgreSql => "SiPostgresql",
        MySql => "SiMysql",
        Sqlite => "SiSqlite",
        MicrosoftSqlServer => "SiMicrosoftsqlserver",
        Oracle => "SiOracle",
        Redis => "SiRedis",
        Elasticsearch => "SiElasticsearch",
        Cassandra => "SiApachecassandra",
        DynamoDb => "SiAmazondynamodb",
        Supabase => "SiSupabase",
        Prisma => "SiPrisma",
        Firebase => "SiFirebase",
        AwsLambda => "SiAwslambda",
        AmazonS3 => "SiAmazons3",
        GoogleCloud => "SiGooglecloud",
        Azure => "SiMicrosoftazure",
        Heroku => "SiHeroku",
        Vercel => "SiVercel",
        Netlify => "SiNetlify",
        DigitalOcean => "SiDigitalocean",
        Docker => "SiDocker",
        Kubernetes => "SiKubernetes",
        Terraform => "SiTerraform",
        Ansible => "SiAnsible",
        Jenkins => "SiJenkins",
        GithubActions => "SiGithubactions",
        CircleCi => "SiCircleci",
        Github => "SiGithub",
        Gitlab => "SiGitlab",
        Bitbucket => "SiBitbucket",
        Git => "SiGit",
        Nginx => "SiNginx",
        Apache => "SiApache",
        ApacheKafka => "SiApachekafka",
        RabbitMq => "SiRabbitmq",
        Linux => "SiLinux",
        Ubuntu => "SiUbuntu",
        GnuBash => "SiGnubash",
        Powershell => "SiPowershell",
        TensorFlow => "SiTensorflow",
        PyTorch => "SiPytorch",
        Keras => "SiKeras",
        ScikitLearn => "SiScikitlearn",
        Pandas => "SiPandas",
        NumPy => "SiNumpy",
        OpenCv => "SiOpencv",
        Jupyter => "SiJupyter",
        HuggingFace => "SiHuggingface",
        OpenAi => "SiOpenai",
        LangChain => "SiLangchain",
        Figma => "SiFigma",
        AdobeXd => "SiAdobexd",
        AdobePhotoshop => "SiAdobephotoshop",
        AdobeIllustrator => "SiAdobeillustrator",
        AdobeAfterEffects => "SiAdobeaftereffects",
        AdobePremierePro => "SiAdobepremierepro",
        Sketch => "SiSketch",
        Canva => "SiCanva",
        Blender => "SiBlender",
        Unity => "SiUnity",
        UnrealEngine => "SiUnrealengine",
        ThreeJs => "SiThreedotjs",
        D3 => "SiD3dotjs",
        Jira => "SiJira",
        Confluence => "SiConfluence",
        Notion => "SiNotion",
        Slack => "SiSlack",
        Trello => "SiTrello",
        Postman => "SiPostman",
        VisualStudioCode => "SiVisualstudiocode",
        VisualStudio => "SiVisualstudio",
        Pnpm => "SiPnpm",
        Yarn => "SiYarn",
        Npm => "SiNpm",
        Stripe => "SiStripe",
        Shopify => "SiShopify",
        WordPress => "SiWordpress",
        Webflow => "SiWebflow",
        Tableau => "SiTableau",
        PowerBi => "SiPowerbi",
        Matlab => "SiMatlab",
    }
}

/// A symbol reference in one of the two icon namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "set", content = "name", rename_all = "snake_case")]
pub enum IconRef {
    General(GeneralIcon),
    Brand(BrandIcon),
}

impl IconRef {
    pub fn symbol(self) -> &'static str {
        match self {
            IconRef::General(icon) => icon.symbol(),
            IconRef::Brand(icon) => icon.symbol(),
        }
    }
}

impl From<GeneralIcon> for IconRef {
    fn from(icon: GeneralIcon) -> Self {
        IconRef::General(icon)
    }
}

impl From<BrandIcon> for IconRef {
    fn from(icon: BrandIcon) -> Self {
        IconRef::Brand(icon)
    }
}
