use chrono::Local;
use leptos::prelude::*;

use crate::directory::Directory;
use crate::models::Activity;

const STYLE: &str = include_str!("../style.css");

fn action_url(activity: &str, action: &str) -> String {
    format!("/activities/{}/{}", urlencoding::encode(activity), action)
}

pub(super) fn render_page(directory: &Directory) -> String {
    let cards_html: String = directory
        .iter()
        .map(|(name, activity)| render_activity_card(name, activity))
        .collect();
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Mergington High School Activities"</title>
                <style>{STYLE}</style>
            </head>
            <body>
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
                <p class="timestamp">"Updated: " {now}</p>
                <div id="message" class="message hidden"></div>
                <div class="activities" inner_html=cards_html />
                <script src="/static/app.js"></script>
            </body>
        </html>
    }
    .to_html()
}

fn render_activity_card(name: &str, activity: &Activity) -> String {
    let title = name.to_string();
    let description = activity.description.clone();
    let schedule = activity.schedule.clone();
    let availability = format!("{} spots left", activity.spots_left());
    let signup_action = action_url(name, "signup");
    let participants_html = render_participants(name, &activity.participants);

    view! {
        <section class="activity-card">
            <h3>{title}</h3>
            <p>{description}</p>
            <p><strong>"Schedule: "</strong>{schedule}</p>
            <p><strong>"Availability: "</strong>{availability}</p>
            <div class="participants" inner_html=participants_html />
            <form class="signup-form" method="post" action=signup_action>
                <input type="email" name="email" placeholder="your-email@mergington.edu" />
                <button type="submit">"Sign Up"</button>
            </form>
        </section>
    }
    .to_html()
}

fn render_participants(activity: &str, participants: &[String]) -> String {
    if participants.is_empty() {
        return view! { <p class="empty">"No participants yet."</p> }.to_html();
    }

    let unregister_action = action_url(activity, "unregister");
    let rows_html: String = participants
        .iter()
        .map(|email| {
            let label = email.clone();
            let value = email.clone();
            let action = unregister_action.clone();
            view! {
                <li>
                    <span>{label}</span>
                    <form class="unregister-form" method="post" action=action>
                        <input type="hidden" name="email" value=value />
                        <button type="submit" title="Unregister">"✕"</button>
                    </form>
                </li>
            }
            .to_html()
        })
        .collect();

    view! {
        <div>
            <h4>"Participants"</h4>
            <ul inner_html=rows_html />
        </div>
    }
    .to_html()
}
