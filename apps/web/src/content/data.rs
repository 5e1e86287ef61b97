use crate::models::{LeadershipItem, Profile, Project, SkillCategory};

pub fn profile() -> Profile {
    Profile {
        name: "Bilal Hasan".into(),
        headline: "Software & ML Engineer".into(),
        tagline: "Results-driven engineer building intelligent, real-time systems that solve critical problems in AI, robotics, and cybersecurity.".into(),
        about: vec![
            "I am a dedicated Computer Science student at Whitworth University with a passion for developing intelligent systems. My experience ranges from improving industrial IT infrastructure at Kaiser Aluminum to providing essential technical support for the Whitworth community and assisting refugee families with digital literacy at the IRC.".into(),
            "With a strong foundation in a wide array of technologies, from full-stack development to machine learning and robotics, I enjoy tackling complex challenges. I am driven by a desire to create real-time solutions for critical problems in AI, robotics, and cybersecurity.".into(),
            "As a leader in campus tech groups like WhitCode and the Google Developer Group, I am committed to building communities and sharing knowledge about the latest advancements in technology.".into(),
        ],
        contact_blurb: "I'm currently open to new opportunities and collaborations. Feel free to reach out if you have a project in mind or just want to say hello!".into(),
        email: "bhasan26@icloud.com".into(),
        avatar_url: "https://picsum.photos/seed/avatar/400/400".into(),
        hero_image_url: "https://picsum.photos/seed/hero/1920/1080".into(),
        github_url: "https://github.com/bhasan26".into(),
        linkedin_url: "https://www.linkedin.com/in/bhasan26/".into(),
    }
}

pub fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory::new(
            "Tech Stack",
            &[
                "Java", "Python", "C++", "C#", "SQL", "JavaScript", "TypeScript", "Swift",
                "HTML/CSS", ".NET", "React", "Node", "Angular", "Flask", "Ignition", "V-sphere",
            ],
        ),
        SkillCategory::new(
            "ML / AI",
            &[
                "LangChain", "CLIP", "RAG", "OpenAI", "OpenCV", "TensorFlow", "Pytorch", "XGBoost",
                "Auto-encoder", "NumPy", "Pandas", "Scikit-Learn", "MatPlotlib",
            ],
        ),
        SkillCategory::new(
            "Robotics and Embedded Systems",
            &[
                "ROS", "SLAM", "AMCL", "LiDAR", "Navigation", "Rviz", "Gazebo", "Jetson Nano",
                "STM32", "OpenMV", "FLIR",
            ],
        ),
        SkillCategory::new(
            "Tools and Platforms",
            &[
                "Git", "CI/CD", "Docker", "Jupyter", "Linux", "Firebase", "GitHub Actions", "Figma",
                "MongoDB", "MySQL", "Vercel", "Netlify", "AWS", "Azure",
            ],
        ),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Autext - Personal Project".into(),
            description: "A full stack web-based app that converts any text into audio, allowing users to create and manage their audiobook library.".into(),
            details: Some(vec![
                "Implemented a full stack web application converting text to audio, using Java, HTML, CSS for Frontend, Node.js with Express for the backend, and the Web Speech API for real-time conversion.".into(),
            ]),
            tags: vec![
                "Java".into(),
                "HTML/CSS".into(),
                "Node.js".into(),
                "Express".into(),
                "Web Speech API".into(),
            ],
            image_url: "https://picsum.photos/seed/autext/600/400".into(),
            live_url: "#".into(),
            source_url: "#".into(),
        },
        Project {
            title: "Emergency Room Simulator - Data Structures Final Project".into(),
            description: "Simulated ER workflows to triage patients by severity.".into(),
            details: Some(vec![
                "Simulated ER workflow by leveraging priority queues for patient triage and linked list/arrays to manage patient records and resource availability, designed real time metrics for wait times and resources utilization for doctors and nurses.".into(),
            ]),
            tags: vec![
                "Data Structures".into(),
                "Algorithms".into(),
                "Java".into(),
                "Priority Queue".into(),
            ],
            image_url: "https://picsum.photos/seed/ersim/600/400".into(),
            live_url: "#".into(),
            source_url: "#".into(),
        },
        Project {
            title: "AI Resume Pro - Personal Project".into(),
            description: "A full stack web app that rates a resume against a job description.".into(),
            details: Some(vec![
                "Used Python, Java, React, and OpenAI API, enabling users to upload resumes and job description for AI-powered rating and comprehensive report generation.".into(),
            ]),
            tags: vec![
                "Python".into(),
                "Java".into(),
                "React".into(),
                "OpenAI API".into(),
                "Full Stack".into(),
            ],
            image_url: "https://picsum.photos/seed/resumepro/600/400".into(),
            live_url: "#".into(),
            source_url: "#".into(),
        },
    ]
}

pub fn leadership() -> Vec<LeadershipItem> {
    vec![
        LeadershipItem {
            title: "President".into(),
            organization: "WhitCode | Whitworth University".into(),
            dates: "Fall 2024 - Present".into(),
            description: vec!["Led workshops on Machine Learning and product building.".into()],
        },
        LeadershipItem {
            title: "Campus Lead".into(),
            organization: "Google Developer Group on Campus | Whitworth University".into(),
            dates: "Fall 2025 - Present".into(),
            description: vec![
                "Led workshops on Google technologies for ML, Deep Learning, and AI; organized hackathons and expanded developer community.".into(),
            ],
        },
    ]
}
