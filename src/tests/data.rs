use futures::executor::block_on;

use crate::data::{
    estimated_read_time, filter_gallery, BlogEntry, BlogPreview, Project, ProjectDetail, Skill,
    SkillCategory,
};
use crate::error::ContentError;

#[test]
fn known_blog_posts_resolve() {
    let post = block_on(BlogEntry::resolve(1)).expect("post 1 exists");
    assert_eq!(post.id, 1);
    assert!(post.title.contains("Socket.io"));
    assert_eq!(post.author, "Ajay Gupta");
    assert!(post.read_time() >= 1);
}

#[test]
fn unknown_blog_post_is_not_found() {
    let missing = block_on(BlogEntry::resolve(99));
    assert_eq!(missing, Err(ContentError::BlogPostNotFound(99)));
}

#[test]
fn every_teaser_has_a_full_entry() {
    for preview in BlogPreview::recent() {
        let entry = block_on(BlogEntry::resolve(preview.id)).expect("teaser resolves");
        assert_eq!(entry.title, preview.title);
        assert_eq!(entry.category, preview.category);
    }
}

#[test]
fn detailed_projects_resolve() {
    let detail = block_on(ProjectDetail::resolve(1)).expect("project 1 exists");
    assert_eq!(detail.title, "Rajasthani Ludo");
    assert!(!detail.technologies.is_empty());
    assert!(!detail.images.is_empty());
}

#[test]
fn unknown_project_is_not_found() {
    let missing = block_on(ProjectDetail::resolve(42));
    assert_eq!(missing, Err(ContentError::ProjectNotFound(42)));
}

#[test]
fn gallery_detail_links_resolve() {
    for project in Project::gallery() {
        if project.has_details {
            assert!(
                block_on(ProjectDetail::resolve(project.id)).is_ok(),
                "gallery links to a detail page that does not exist: {}",
                project.id
            );
        }
    }
}

#[test]
fn skill_grouping_preserves_order_and_drops_nothing() {
    let grouped = Skill::grouped();
    let total: usize = grouped.iter().map(|(_, members)| members.len()).sum();
    assert_eq!(total, Skill::all().len());

    let positions: Vec<usize> = grouped
        .iter()
        .map(|(category, _)| {
            SkillCategory::ORDER
                .iter()
                .position(|c| c == category)
                .expect("grouped category is a known category")
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    for (category, members) in grouped {
        assert!(members.iter().all(|skill| skill.category == category));
    }
}

#[test]
fn category_filter_keeps_all_or_exact_members() {
    let gallery = Project::gallery();

    let everything = filter_gallery(&gallery, "All");
    assert_eq!(everything.len(), gallery.len());

    let gaming = filter_gallery(&gallery, "Gaming");
    assert!(!gaming.is_empty());
    assert!(gaming.iter().all(|project| project.category == "Gaming"));
    let expected = gallery.iter().filter(|p| p.category == "Gaming").count();
    assert_eq!(gaming.len(), expected);
}

#[test]
fn distinct_categories_cover_the_gallery() {
    let categories = Project::categories();
    for project in Project::gallery() {
        assert!(categories.contains(&project.category));
    }
    let mut deduped = categories.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(categories.len(), deduped.len());
}

#[test]
fn read_time_ignores_markup_and_rounds_up() {
    // 1 heading word + 399 body words: exactly 400 words, two minutes at 200 wpm.
    let body = format!("<h2>Heading</h2><p>{}</p>", "word ".repeat(399).trim());
    assert_eq!(estimated_read_time(&body), 2);

    // Markup alone still reads as one minute.
    assert_eq!(estimated_read_time("<p></p><ul><li></li></ul>"), 1);

    let short = "<p>just a few words here</p>";
    assert_eq!(estimated_read_time(short), 1);
}
