// Seeded portfolio content served until the owner saves their own document.
use super::entities::{
    AboutSection, Achievement, Article, ArticleStatus, Certification, CvFile, Experience,
    PortfolioDocument, Profile, Project, SkillCategory,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_document() -> PortfolioDocument {
    PortfolioDocument {
        profile: default_profile(),
        about: default_about(),
        skills: default_skills(),
        experiences: default_experiences(),
        projects: default_projects(),
        achievements: default_achievements(),
        certifications: default_certifications(),
        articles: default_articles(),
        cv_files: vec![CvFile {
            id: "1".to_string(),
            name: "M.K.T.S.THILAKARATHNA-CV.pdf".to_string(),
            label: "Main CV".to_string(),
            url: "/M.K.T.S.THILAKARATHNA-CV.pdf".to_string(),
            is_active: true,
        }],
    }
}

fn default_profile() -> Profile {
    Profile {
        name: "Tharusha Thilakarathna".to_string(),
        title: "DevOps Engineer | Cloud & Automation".to_string(),
        subtitle: "Welcome to my portfolio".to_string(),
        bio: "Passionate about building reliable, scalable cloud infrastructure and streamlining \
development workflows through CI/CD automation. I specialize in containerization, \
orchestration, and infrastructure as code to deliver robust DevOps solutions."
            .to_string(),
        profile_image: "/profile.png".to_string(),
        location: "Chilaw, Sri Lanka".to_string(),
        email: "thilakarathna.mkts@gmail.com".to_string(),
        linkedin: "Tharusha Sachinthana".to_string(),
        linkedin_url: "https://www.linkedin.com/in/tharusha-sachinthana-150773264/".to_string(),
        github: "TharushaSachinthana".to_string(),
        github_url: "https://github.com/TharushaSachinthana".to_string(),
    }
}

fn default_about() -> AboutSection {
    AboutSection {
        education_title: "Education & Background".to_string(),
        education_description: "I'm currently pursuing my degree in Computer Engineering at \
the University of Jaffna, where I've developed a strong foundation in software engineering, \
cloud computing, and DevOps practices."
            .to_string(),
        professional_title: "Professional Experience".to_string(),
        professional_description: "I'm currently working as a Software Engineer Intern at \
Zebra Technologies, where I've gained hands-on experience in building and optimizing CI/CD \
pipelines, containerizing applications with Docker, and managing cloud infrastructure."
            .to_string(),
        closing_statement: "Through competitive programming and industry experience, I've \
developed strong problem-solving skills and a deep understanding of software development best \
practices. I'm committed to continuous learning and staying updated with the latest DevOps \
tools and cloud technologies."
            .to_string(),
    }
}

fn default_skills() -> Vec<SkillCategory> {
    let category = |title: &str, icon: &str, color: &str, skills: &[&str]| SkillCategory {
        title: title.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        skills: strings(skills),
    };

    vec![
        category(
            "DevOps & Cloud",
            "Cloud",
            "from-blue-400 to-blue-600",
            &[
                "GitHub Actions",
                "Jenkins",
                "GitLab CI",
                "Docker",
                "Kubernetes",
                "Terraform",
                "Ansible",
                "AWS",
                "GCP",
                "Prometheus",
                "Datadog",
                "CloudWatch",
                "VPC",
            ],
        ),
        category(
            "Programming & Scripting",
            "Code",
            "from-green-400 to-emerald-600",
            &["Python", "Java", "Bash", "PowerShell"],
        ),
        category(
            "Databases",
            "Database",
            "from-purple-400 to-purple-600",
            &["MySQL", "PostgreSQL", "MSSQL", "PL/SQL"],
        ),
        category(
            "Platforms & Tools",
            "Wrench",
            "from-orange-400 to-red-600",
            &["Git", "GitHub", "Jira", "Linux", "Windows"],
        ),
        category(
            "Data Engineering",
            "Code",
            "from-gray-400 to-gray-600",
            &[
                "Apache Spark",
                "HDFS",
                "Big Data Analytics",
                "Distributed computing",
                "Google dataproc",
                "BigQuery",
            ],
        ),
    ]
}

fn default_experiences() -> Vec<Experience> {
    vec![Experience {
        id: "1".to_string(),
        title: "Software Engineer Intern".to_string(),
        company: "Zebra Technologies".to_string(),
        location: "Nawala, Srilanaka - hybrid".to_string(),
        period: "February 2025 – August 2025".to_string(),
        description: "Delivered CI/CD and deployment automation that boosted release speed"
            .to_string(),
        highlights: strings(&[
            "Performed a full database migration from Microsoft SQL Server to PostgreSQL, ensuring all table data and constraints were preserved without conflicts. Implemented ORM-based access for improved security and maintainability.",
            "Designed and implemented full integration test coverage for a large-scale .NET C# application, improving code reliability and reducing manual QA time.",
            "Built and maintained a fully automated CI/CD pipeline in GitHub Actions, integrating build, test, and deployment stages.",
            "Configured and optimized self-hosted runners on on-premises Windows and Ubuntu servers, enabling faster, secure builds.",
            "Automated deployments by pushing Docker images to JFrog Artifactory upon successful test completion.",
            "Developed a version-check job to automatically detect new Docker image versions in Artifactory, compare them with docker-compose configurations, and update running services without downtime.",
            "Improved deployment efficiency and reduced release time from hours to minutes through automation and containerization best practices.",
        ]),
    }]
}

fn default_projects() -> Vec<Project> {
    vec![Project {
        id: "1".to_string(),
        title: "Scalable Distributed Machine Learning Framework for Healthcare IoT Analytics"
            .to_string(),
        short_description: "Architected and deployed a fault-tolerant, distributed big data \
pipeline on Google Cloud Platform (Dataproc) to process massive-scale ECG sensor data. \
Engineered a solution that benchmarked horizontal vs. vertical scaling, successfully overcoming \
\"Out-of-Memory\" bottlenecks inherent in single-node architectures processing 11M+ records."
            .to_string(),
        full_description: "This research project addressed the critical challenge of processing \
high-velocity, high-volume IoT data in the healthcare sector, specifically for cardiac arrhythmia \
detection. Traditional single-node processing methods fail under the load of massive datasets, \
leading to system crashes and latency that is unacceptable for clinical monitoring.

I designed and implemented an end-to-end distributed analytics pipeline using Apache Spark on \
Google Cloud Dataproc. The project involved a rigorous performance benchmark comparing a \
distributed cluster against powerful standalone servers using the 11-million-row HIGGS dataset \
and complex binary ECG data.

The final results demonstrated that while vertical scaling offers raw speed for \
communication-heavy training tasks, the distributed cluster provided a 30% improvement in \
inference speed and was the only architecture capable of reliably handling the full dataset \
workload without failure."
            .to_string(),
        technologies: strings(&[
            "GCP",
            "Dataproc",
            "Apache Spark",
            "PySpark",
            "BigQuery",
            "Cloud Storage",
            "Pub/Sub",
            "Python",
            "Machine Learning",
            "IoT",
            "Hadoop",
        ]),
        images: strings(&[
            "https://images.unsplash.com/photo-1641757625075-d018760a4fb5?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=1080",
        ]),
        highlights: strings(&[
            "Architected a Multi-Node Cluster: Provisioned and configured a 5-node Spark cluster managed by YARN, automating setup via initialization scripts to pre-install dependencies (wfdb, neurokit2).",
            "Solved \"Impossible\" Workloads: Demonstrated that a distributed architecture could successfully process workloads that caused immediate OOM crashes on standalone servers with identical per-node specs.",
            "30% Faster Inference: Achieved a 30.6% reduction in prediction latency using the distributed cluster compared to a vertically scaled server, validating the architecture for real-time monitoring use cases.",
            "Infrastructure Troubleshooting: Successfully diagnosed and resolved complex distributed system errors including java.io.EOFException (split capabilities), RateLimitExceeded (API quotas), and SIGKILL (memory leaks).",
            "Optimized Data Pipeline: Implemented a robust \"staging\" pattern for data ingestion, bypassing cluster network restrictions and local disk limits to securely onboard multi-gigabyte datasets.",
        ]),
        ..Default::default()
    }]
}

fn default_achievements() -> Vec<Achievement> {
    let achievement = |id: &str, icon: &str, title: &str, rank: &str, subrank: &str, description: &str, color: &str| Achievement {
        id: id.to_string(),
        icon: icon.to_string(),
        title: title.to_string(),
        rank: rank.to_string(),
        subrank: subrank.to_string(),
        description: description.to_string(),
        color: color.to_string(),
    };

    vec![
        achievement(
            "1",
            "Trophy",
            "IEEE Xtreme 18.0",
            "Global Rank 109",
            "Sri Lanka Rank 6",
            "Competed in the world's premier programming competition",
            "from-yellow-400 to-orange-500",
        ),
        achievement(
            "2",
            "Award",
            "Agni Xtreme Champions",
            "Championship Winner",
            "Team Competition",
            "Led team to victory in competitive programming challenge",
            "from-blue-400 to-blue-600",
        ),
        achievement(
            "3",
            "Medal",
            "ACES Coders V11.0",
            "Top 10 in Sri Lanka",
            "National Level",
            "Excelled in algorithm design and problem solving",
            "from-green-400 to-emerald-600",
        ),
        achievement(
            "4",
            "Star",
            "Huawei ICT Competition",
            "Top 10",
            "Network Track",
            "Demonstrated expertise in cloud technologies and networking",
            "from-purple-400 to-purple-600",
        ),
    ]
}

fn default_certifications() -> Vec<Certification> {
    let certification = |id: &str, title: &str, issuer: &str, date: &str, link: &str, skills: &[&str]| Certification {
        id: id.to_string(),
        title: title.to_string(),
        issuer: issuer.to_string(),
        date: date.to_string(),
        link: link.to_string(),
        skills: strings(skills),
    };

    vec![
        certification(
            "1",
            "DevOps Foundations: Infrastructure as Code",
            "Linkedin",
            "2025 August",
            "https://www.linkedin.com/learning/certificates/66c2d2991f146c9aa864e3841aace4f1fe8eb0962358e0ee42b9d53b1760e8a0",
            &["IaC Best Practices", "Infrastructure as code (IaC)"],
        ),
        certification(
            "2",
            "DevOps Professional Certificate by PagerDuty and LinkedIn",
            "PagerDuty",
            "2025 October",
            "https://www.linkedin.com/learning/certificates/b658472806eeef3d4b5c4df319a170df51805ade8553f5f5a18a0a4d5a96ec22",
            &[
                "DevOps Culture",
                "DevOps",
                "Continuous Integration and Continuous Delivery (CI/CD)",
            ],
        ),
        certification(
            "3",
            "DevOps Foundations: Continuous Delivery/Continuous Integration",
            "CompTIA",
            "2025 October",
            "https://www.linkedin.com/learning/certificates/dbb02aa5eebd92dbfa435b83f1da4f5635bbdd5a9d5c27a3c890620589b8c778",
            &["Containerization", "Docker Compose"],
        ),
        certification(
            "4",
            "Docker Foundations Professional Certificate",
            "Docker",
            "2025 May",
            "https://www.linkedin.com/learning/certificates/157aff5f98395837f28c178d625d12c04e2198db7657741a168cbf93110ceaa4",
            &["Docker Products", "Containerization"],
        ),
        certification(
            "5",
            "GitHub Foundations",
            "GitHub",
            "2024 December",
            "https://www.credly.com/badges/08577727-5cc1-400f-9c27-9a366267ce6d/public_url",
            &["Version Control", "Collaboration", "Git Best Practices"],
        ),
        certification(
            "6",
            "GitHub Actions",
            "GitHub",
            "2024 July",
            "https://www.credly.com/badges/5f207d4d-afbf-4a6b-80ce-c6cf8ef715e2/public_url",
            &["CI/CD", "Workflow Automation", "GitHub Actions"],
        ),
        certification(
            "7",
            "Kubernetes: Microservices",
            "Kim Schlesinger",
            "2024 April",
            "https://www.linkedin.com/learning/certificates/94c58fb4f701b56250f76c6cd3ad3fc59448598dacb37c422f127336ab0f71ac",
            &["Kubernetes"],
        ),
    ]
}

fn default_articles() -> Vec<Article> {
    let published = |id: &str, title: &str, description: &str, date: &str, read_time: &str, tags: &[&str], url: &str| Article {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        tags: strings(tags),
        status: ArticleStatus::Published,
        url: Some(url.to_string()),
        cover_image: None,
    };

    vec![
        published(
            "1",
            "Unraveling Docker Networking: A Deep Dive into Its Core Mechanics",
            "A clear, practical breakdown of how Docker networking works, from bridge and host networks to overlays and macvlan, plus real-world insights into Linux, macOS, and Windows differences.",
            "2 JUNE 2025",
            "12 min read",
            &[
                "DevOps",
                "Docker Networking",
                "Container Architecture",
                "Network Namespaces",
                "Bridge & Host Networks",
            ],
            "https://www.linkedin.com/pulse/unraveling-docker-networking-deep-dive-its-core-tharusha-sachinthana-3h5uc/",
        ),
        published(
            "2",
            "GitHub Runners Unveiled: The Engine Behind CI/CD",
            "A foundational look at how GitHub Runners work, covering their lifecycle, cold-start behavior, hidden performance tricks, and why they're the core automation engine behind every CI/CD workflow.",
            "09 JULY 2025",
            "11 min read",
            &["GitHub Runners", "CI/CD Fundamentals", "DevOps Automation", "Workflow Execution"],
            "https://www.linkedin.com/pulse/github-runners-unveiled-engine-behind-cicd-tharusha-sachinthana-rccuc/",
        ),
        published(
            "3",
            "Self-Hosted and Containerized Runners: Power, Control, and Scalable CI/CD",
            "A clear breakdown of self-hosted and containerized GitHub runners: why teams use them, how they enable performance, customization, and internal network access, and how Kubernetes and ephemeral runners unlock enterprise-level scalability.",
            "20 JULY 2025",
            "12 min read",
            &[
                "Self-Hosted Runners",
                "Containerized Runners",
                "Kubernetes ARC",
                "CI/CD Infrastructure",
            ],
            "https://www.linkedin.com/pulse/self-hosted-containerized-runners-power-control-scale-sachinthana-ygg3c/",
        ),
        published(
            "4",
            "Optimizing GitHub Runners and the Future of CI/CD: Performance, Scale, and Security",
            "An overview of performance tuning, scaling, and securing GitHub Runners, plus insights into emerging CI/CD trends like serverless runners, zero-trust security, and intelligent caching.",
            "27 JULY 2025",
            "13 min read",
            &[
                "GitHub Runners",
                "CI/CD Optimization",
                "DevOps Engineering",
                "Pipeline Scalability",
            ],
            "https://www.linkedin.com/pulse/optimizing-runners-future-cicd-tharusha-sachinthana-vfobc/",
        ),
        published(
            "5",
            "Streamlining Docker Image Updates: Three Practical Automation Strategies for Modern DevOps Pipelines",
            "A practical breakdown of three methods to automate Docker image updates using GitHub Actions, cron jobs, and Watchtower to eliminate manual deployments and improve reliability across environments.",
            "10 AUGUST 2025",
            "5 min read",
            &[
                "DevOps",
                "CI/CD Automation",
                "Docker",
                "GitHub Actions",
                "Deployment Automation",
            ],
            "https://www.linkedin.com/pulse/streamlining-docker-image-updates-three-practical-sachinthana-o2vrc/",
        ),
        published(
            "6",
            "Bridging CI/CD Gaps: How to Access Local Machine CLI from GitHub Actions for Reliable Testing",
            "A guide to solving CI/CD inconsistencies by enabling GitHub Actions to access local machine CLI tools, ensuring reliable testing, smoother workflows, and true environment parity.",
            "17 AUGUST 2025",
            "11 min read",
            &[
                "CI/CD",
                "GitHub Actions",
                "DevOps Engineering",
                "Self-Hosted Runners",
                "Pipeline Reliability",
            ],
            "https://www.linkedin.com/pulse/bridging-cicd-gaps-accessing-local-machine-cli-from-sachinthana-dxcvc/",
        ),
        published(
            "7",
            "Unlocking the Power of Big Data Analytics with Distributed Computing on Google Dataproc",
            "A practical overview of how Google Dataproc enables scalable big data processing through distributed computing, covering cluster design, storage choices, API integrations, and distributed machine learning with Spark.",
            "05 OCTOBER 2025",
            "13 min read",
            &[
                "Google Dataproc",
                "Big Data Analytics",
                "Distributed Computing",
                "Apache Spark",
                "Cloud Data Engineering",
            ],
            "https://www.linkedin.com/pulse/unlocking-power-big-data-analytics-distributed-google-sachinthana-xt27c/",
        ),
    ]
}
