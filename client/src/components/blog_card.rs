//! Card for one approved post in the public listing.

use leptos::prelude::*;

use crate::net::types::ApprovedBlog;
use crate::util::blog::content_preview;

#[component]
pub fn BlogCard(blog: ApprovedBlog) -> impl IntoView {
    let href = format!("/blogs/{}", blog.id);
    let preview = content_preview(&blog.content);
    let views = format!("{} views", blog.viewcount);

    view! {
        <a class="blog-card" href=href>
            <span class="blog-card__domain">{blog.domain}</span>
            <span class="blog-card__topic">{blog.topic}</span>
            <h2 class="blog-card__title">{blog.title}</h2>
            <p class="blog-card__preview">{preview}</p>
            <span class="blog-card__meta">{views}</span>
        </a>
    }
}
