use aeas_models::Comment;
use yew::prelude::*;

use crate::app::context::{use_bundle, use_language};
use crate::core::comments::build_threads;
use crate::core::format::format_date_time;
use crate::i18n::LocaleCode;

#[derive(Properties, PartialEq)]
pub(crate) struct CommentListProps {
    pub comments: Vec<Comment>,
}

#[function_component(CommentList)]
pub(crate) fn comment_list(props: &CommentListProps) -> Html {
    let bundle = use_bundle();
    let language = use_language().language;
    let threads = build_threads(&props.comments);
    let heading = bundle.format(
        "comments.title",
        "Comentários ({count})",
        &[("count", &props.comments.len().to_string())],
    );

    html! {
        <section class="comments">
            <h2>{heading}</h2>
            if threads.is_empty() {
                <p class="muted">{bundle.text("comments.empty", "Ainda não há comentários.")}</p>
            } else {
                <ol class="comment-threads">
                    {for threads.iter().map(|thread| html! {
                        <li key={thread.root.id.clone()}>
                            {render_comment(&thread.root, language)}
                            if !thread.replies.is_empty() {
                                <ol class="comment-replies">
                                    {for thread.replies.iter().map(|reply| html! {
                                        <li key={reply.id.clone()}>{render_comment(reply, language)}</li>
                                    })}
                                </ol>
                            }
                        </li>
                    })}
                </ol>
            }
        </section>
    }
}

fn render_comment(comment: &Comment, language: LocaleCode) -> Html {
    html! {
        <article class="comment">
            <header>
                <strong>{comment.author_name.clone()}</strong>
                if let Some(created) = comment.created_at {
                    <time datetime={created.to_rfc3339()}>{format_date_time(created, language)}</time>
                }
            </header>
            <p>{comment.content.clone()}</p>
        </article>
    }
}
