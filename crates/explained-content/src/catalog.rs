//! Built-in tutorial catalog.
//!
//! Topic bodies live under `content/<category>/<slug>.md` and are embedded
//! at compile time.

use crate::topic::{Category, Topic};

macro_rules! topic {
    ($category:literal, $slug:literal, $title:literal, $description:literal) => {
        Topic {
            title: $title,
            slug: $slug,
            description: $description,
            content: include_str!(concat!("../content/", $category, "/", $slug, ".md")),
        }
    };
}

pub(crate) const CATEGORIES: &[Category] = &[
    Category {
        id: "getting-started",
        topics: &[
            topic!(
                "getting-started",
                "introduction-to-react",
                "Introduction to React",
                "Learn the basics of React and get started with your first component"
            ),
            topic!(
                "getting-started",
                "components-and-props",
                "Components and Props",
                "Learn about React components and how to use props"
            ),
        ],
    },
    Category {
        id: "core-concepts",
        topics: &[
            topic!(
                "core-concepts",
                "understanding-hooks",
                "Understanding Hooks",
                "Master React hooks to manage state and side effects in your components"
            ),
            topic!(
                "core-concepts",
                "state-management",
                "State Management",
                "Learn different approaches to manage state in React applications"
            ),
        ],
    },
    Category {
        id: "advanced-topics",
        topics: &[
            topic!(
                "advanced-topics",
                "component-patterns",
                "Component Patterns",
                "Explore different component patterns to structure your React applications"
            ),
            topic!(
                "advanced-topics",
                "performance-optimization",
                "Performance Optimization",
                "Tips and techniques to optimize your React application performance"
            ),
        ],
    },
    Category {
        id: "practical-guides",
        topics: &[
            topic!(
                "practical-guides",
                "styling-in-react",
                "Styling in React",
                "Different approaches to styling your React components"
            ),
            topic!(
                "practical-guides",
                "react-router",
                "React Router",
                "Implement client-side routing in your React applications"
            ),
        ],
    },
    Category {
        id: "ecosystem",
        topics: &[
            topic!(
                "ecosystem",
                "react-ecosystem",
                "React Ecosystem",
                "Discover popular libraries and tools in the React ecosystem"
            ),
        ],
    },
];
