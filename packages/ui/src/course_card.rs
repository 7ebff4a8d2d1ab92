use dioxus::prelude::*;
use store::Course;

use crate::EnrollButton;

/// One card in the catalog grid.
#[component]
pub fn CourseCard(
    course: Course,
    category: String,
    on_require_auth: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "course-card",
            if let Some(ref thumbnail) = course.thumbnail {
                img {
                    class: "course-card-thumbnail",
                    src: "{thumbnail}",
                    alt: "{course.title}",
                }
            }
            div {
                class: "course-card-body",
                div {
                    class: "course-card-header",
                    h2 { class: "course-card-title", "{course.title}" }
                    EnrollButton {
                        course_id: course.id,
                        on_require_auth: on_require_auth,
                    }
                }
                p { class: "course-card-description", "{course.description}" }
                div {
                    class: "course-card-meta",
                    span { class: "course-card-category", "{category}" }
                    span { class: "course-card-price", "${course.price}" }
                }
            }
        }
    }
}
