use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Mobile,
    Testing,
}

impl SkillCategory {
    // Display order on the skills section.
    pub const ORDER: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::DevOps,
        SkillCategory::Mobile,
        SkillCategory::Testing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Testing => "Testing",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

impl Skill {
    fn new(name: &str, level: u8, category: SkillCategory) -> Self {
        Self {
            name: name.to_string(),
            level,
            category,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Skill::new("React", 90, SkillCategory::Frontend),
            Skill::new("React Native", 65, SkillCategory::Frontend),
            Skill::new("TypeScript", 85, SkillCategory::Frontend),
            Skill::new("HTML", 95, SkillCategory::Frontend),
            Skill::new("CSS", 90, SkillCategory::Frontend),
            Skill::new("JavaScript", 95, SkillCategory::Frontend),
            Skill::new("Node.js", 88, SkillCategory::Backend),
            Skill::new("PHP", 85, SkillCategory::Backend),
            Skill::new("Python", 80, SkillCategory::Backend),
            Skill::new("Java (Spring Boot)", 75, SkillCategory::Backend),
            Skill::new("REST API", 90, SkillCategory::Backend),
            Skill::new("MySQL", 85, SkillCategory::Database),
            Skill::new("MongoDB", 90, SkillCategory::Database),
            Skill::new("Redis", 80, SkillCategory::Database),
            Skill::new("AWS", 75, SkillCategory::DevOps),
            Skill::new("BullMQ", 70, SkillCategory::DevOps),
            Skill::new("Socket.io", 85, SkillCategory::DevOps),
            Skill::new("Android Studio (Java)", 70, SkillCategory::Mobile),
            Skill::new("NodeJS Unit Test", 80, SkillCategory::Testing),
        ]
    }

    /// Skills grouped for display, in the fixed category order. Categories
    /// with no entries are omitted.
    pub fn grouped() -> Vec<(SkillCategory, Vec<Self>)> {
        let all = Self::all();
        SkillCategory::ORDER
            .into_iter()
            .filter_map(|category| {
                let members: Vec<Self> = all
                    .iter()
                    .filter(|skill| skill.category == category)
                    .cloned()
                    .collect();
                if members.is_empty() {
                    None
                } else {
                    Some((category, members))
                }
            })
            .collect()
    }
}
