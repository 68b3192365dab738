//! Built-in catalog

use super::{Catalog, Icon, Post, Project};

fn project(icon: Icon, title: &str, description: &str, tags: &[&str]) -> Project {
    Project {
        icon,
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn post(icon: Icon, title: &str, description: &str) -> Post {
    Post {
        icon,
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub(super) fn catalog() -> Catalog {
    let projects = vec![
        project(
            Icon::Youtube,
            "YouTube Niche App",
            "A specialized platform for curating and discovering niche YouTube content, built with modern web technologies.",
            &["Next.js", "YouTube API", "Tailwind"],
        ),
        project(
            Icon::Layout,
            "Task Manager",
            "A minimalist yet powerful task management application with real-time updates and team collaboration features.",
            &["React", "Firebase", "TypeScript"],
        ),
        project(
            Icon::Rocket,
            "bolt.new",
            "A lightning-fast project starter inspired by create-next-app, with added features and modern tooling.",
            &["Node.js", "CLI", "TypeScript"],
        ),
        project(
            Icon::Presentation,
            "slides.ai",
            "AI-powered presentation generator that creates beautiful slides from natural language input.",
            &["OpenAI", "Next.js", "Vercel AI SDK"],
        ),
        project(
            Icon::Newspaper,
            "Dev Blog",
            "A modern blog platform sharing detailed roadmaps and guides for building full-stack applications.",
            &["MDX", "Next.js", "Tailwind"],
        ),
    ];

    let posts = vec![
        post(
            Icon::FileCode,
            "Building a Full-Stack Next.js App",
            "A comprehensive guide to building and deploying a modern web application with Next.js 13+.",
        ),
        post(
            Icon::Brain,
            "React Design Patterns",
            "Essential patterns and best practices for building scalable React applications.",
        ),
        post(
            Icon::PenTool,
            "API Design Guidelines",
            "Learn how to design and implement robust APIs that developers love to use.",
        ),
    ];

    Catalog::new(projects, posts)
}
