//! Static site content rendered inside the desktop windows.

use system_ui::IconName;

use crate::model::DocumentId;

pub const MOSAIC_URL: &str = "https://trymosaic.co";
pub const NEUROTRAITS_URL: &str = "https://neurotraits.trymosaic.co";
pub const FOCUS_URL: &str = "https://focus.trymosaic.co";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ryan-hoare-344b0590/";
pub const HELLO_MAILTO: &str = "mailto:hello@trymosaic.co";
pub const CONTACT_MAILTO: &str = "mailto:ryan@trymosaic.co";

pub const OWNER_NAME: &str = "Ryan Hoare";
pub const OWNER_TAGLINE: &str = "Builder by nature. Infrastructure by inclination.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I build systems that help organisations deal with reality rather than pretend it is simpler than it is.",
    "Most of my work sits at the junction of software, policy, and human behaviour. I focus on the parts that are usually hand-waved away: edge cases, accountability, compliance, trust, and what happens when a process meets a tired person on a bad day.",
    "I'm the founder of TryMosaic, a platform that turns reasonable adjustments from an awkward conversation into dependable infrastructure. The work is grounded in lived experience, and shaped by time spent inside large institutions where good intentions routinely fail without systems to support them.",
    "I'm sceptical of novelty for its own sake. I care about things that work quietly, scale without drama, and stand up to scrutiny. My default move is to reduce complexity, make responsibility explicit, and design for the person who has to use the system when they are already under pressure.",
    "I write in plain English because clarity is a form of respect. I build software the same way.",
    "I'm based in Bristol, and I'm a parent to a wonderful child.",
];

pub const WHY_PARAGRAPHS: &[&str] = &[
    "This site is a reaction to the modern web.",
    "It is calm.",
    "It is static.",
    "It does not track you",
    "I spend my working life building systems that are meant to support people. Too often, the tools we use do the opposite. They add friction, noise, and obligation where there should be clarity.",
    "This site is intentionally simple. It loads quickly. It explains itself. It gets out of the way.",
    "Also, I really miss Windows 95.",
];

pub const CONTACT_INTRO: &str = "The best way to reach me is email.";

/// One card in the "What I'm Working On" window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub icon: IconName,
    pub blurb: &'static str,
    pub link_label: &'static str,
    pub href: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "TryMosaic",
        icon: IconName::HardDrive,
        blurb: "A software platform that makes reasonable adjustments unreasonably easy found at",
        link_label: "trymosaic.co",
        href: MOSAIC_URL,
    },
    Project {
        name: "neurotraits",
        icon: IconName::Computer,
        blurb: "A light touch profiler which makes a simple profile of your spiky profile found at",
        link_label: "neurotraits.trymosaic.co",
        href: NEUROTRAITS_URL,
    },
    Project {
        name: "Mosaic focus",
        icon: IconName::Computer,
        blurb: "A hygge pomodoro timer (a gentle focus timer) which is ND friendly. Described as the \"cutest timer i've ever seen.\" found at",
        link_label: "focus.trymosaic.co",
        href: FOCUS_URL,
    },
    Project {
        name: "Consulting",
        icon: IconName::User,
        blurb: "I do talks on product, neurodiversity and tech, contact me",
        link_label: "here",
        href: HELLO_MAILTO,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Essay {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
}

pub const ESSAYS: &[Essay] = &[
    Essay {
        id: "play-to-win",
        title: "Why we Play to win",
        date: "December 2024",
        excerpt: "Because the stakes are too high not to win.",
        content: "Why we Play to win

People sometimes ask why i'm so obsessed with competition.
Why we talk about winning in a space that's supposed to be collaborative, charitable, even gentle.
Why we sound more like a startup than a social movement.
It's a fair question.
But the answer is simple: because the stakes are too high not to win.

This work matters.
It affects millions of people in the UK and billions globally.
If we fail, it's not just us that loses.
It's every neurodivergent and disabled person still trapped in systems that don't work.
You can't fix that with goodwill alone.
You fix it with infrastructure: secure, standardised, trusted.
Infrastructure is expensive.
Expensive means venture-scale.
Venture-scale means capital.
Capital means traction.
Traction means winning.
You can build good tools slowly, or build great systems fast.
We chose fast, because people can't wait.

There's a comforting myth that everyone can win.
But that's only true if everyone's competent, ethical, and aligned.
They're not.
We play to win because others are already playing to win.
Some with integrity. Some without.
Pretending otherwise only helps the ones who play dirty.
Bad actors turn trust into marketing.
Mediocre platforms treat people's data like an afterthought.
Grant-funded pilots vanish after twelve months, leaving employers disillusioned and employees exposed.
If we don't play to win, those are the people who do.
And when they win, people get hurt.

Playing to win doesn't mean ego.
It means stewardship.
It means building the standard that protects everyone else.
It means out-executing the performative, out-thinking the careless, and out-lasting the opportunistic.
It means carrying the weight of knowing that if we don't build it right, someone else will build it wrong.

We're not competing for attention.
We're competing with entropy: with chaos, confusion, and inconsistency.
Winning means fairness becomes predictable.
It means the system works quietly, everywhere, for everyone.
Winning doesn't mean burning out.
It means staying sharp enough to keep building.
It means building something too strong to be ignored, too solid to be undone.
Mosaic plays to win because it must.",
    },
    Essay {
        id: "infrastructure-as-craft",
        title: "Infrastructure as Craft",
        date: "November 2024",
        excerpt: "Treating systems like they matter.",
        content: "Infrastructure as Craft

There's a difference between code that works and code that's built to last.

I think infrastructure should be treated like craft. Not art: art is personal and ephemeral. Not manufacturing: manufacturing is about volume and efficiency. Craft.

Good craft means:
- Understanding the material. Know your database. Know your network. Know your operating system.
- Obsessing over details. The naming of variables. The clarity of logs. The graceful degradation under failure.
- Accepting responsibility. You built this thing. It's yours. When it breaks at 3am, you own it.
- Preferring longevity. Will this still make sense in five years? Can the next person understand it?

The best infrastructure I've ever maintained was written by people who cared about these things. Not because they were paid more. Because they thought it mattered.

It does.",
    },
    Essay {
        id: "on-remote-work",
        title: "On Remote Work",
        date: "October 2024",
        excerpt: "Building teams across time zones.",
        content: "On Remote Work

Remote work gets a lot of criticism. Most of it misses the point.

The issue isn't remote work. The issue is asynchronous communication. If you try to run a fully synchronous remote team, everyone on Zoom all day, you've built the worst of both worlds.

Good remote work is asynchronous first. Write things down. Document decisions. Trust people to solve problems without checking in every hour.

This requires discipline. It requires that your team can think independently. It requires clear goals and clear communication.

But when it works, it's remarkable. Your team isn't limited by geography. You can hire the best person for the job, regardless of where they live. You can work during your peak hours, not when the office says you should.

The companies that figured this out, really figured it out, have enormous advantages. They don't compete for talent in one city. They compete globally.",
    },
];

pub const ESSAY_PLACEHOLDER: &str = "Select a document to view";

pub fn essay(id: &str) -> Option<&'static Essay> {
    ESSAYS.iter().find(|essay| essay.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPadEntry {
    pub date: &'static str,
    pub text: &'static str,
}

pub const TEXT_PAD_ENTRIES: &[TextPadEntry] = &[
    TextPadEntry {
        date: "19 Dec",
        text: "Most things worth doing require patience that doesn't photograph well.",
    },
    TextPadEntry {
        date: "16 Dec",
        text: "Good infrastructure is invisible until it fails. Then it becomes the only thing anyone can see.",
    },
    TextPadEntry {
        date: "14 Dec",
        text: "The people who complain about bloat are usually the ones who benefit most from it.",
    },
    TextPadEntry {
        date: "12 Dec",
        text: "Accessibility isn't a feature. It's an indicator of how carefully you've thought about the problem.",
    },
    TextPadEntry {
        date: "10 Dec",
        text: "The best code I ever wrote was code I deleted.",
    },
    TextPadEntry {
        date: "8 Dec",
        text: "Systems don't fail because of bad intentions. They fail because of the gap between what someone planned and what actually happens.",
    },
    TextPadEntry {
        date: "6 Dec",
        text: "Simplicity on the surface usually means complexity buried underneath. The question is whether that complexity serves you or controls you.",
    },
    TextPadEntry {
        date: "4 Dec",
        text: "Every decision to add something is a decision to maintain it forever.",
    },
    TextPadEntry {
        date: "2 Dec",
        text: "The most honest software is software that admits what it cannot do.",
    },
    TextPadEntry {
        date: "30 Nov",
        text: "You can tell how a system was built by watching what breaks first.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub id: u8,
    pub name: &'static str,
    pub src: &'static str,
}

pub const PHOTOS: &[Photo] = &[
    Photo {
        id: 1,
        name: "Team",
        src: "/photos/photo1.jpg",
    },
    Photo {
        id: 2,
        name: "Speaking",
        src: "/photos/photo2.jpg",
    },
    Photo {
        id: 3,
        name: "Headshot",
        src: "/photos/photo3.jpg",
    },
    Photo {
        id: 4,
        name: "Event",
        src: "/photos/photo4.jpg",
    },
    Photo {
        id: 5,
        name: "Beach",
        src: "/photos/photo5.jpg",
    },
];

/// A file in the Recycle Bin, opened as the ephemeral document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecycledDocument {
    pub id: &'static str,
    pub name: &'static str,
    pub deleted_on: &'static str,
    pub body: &'static str,
}

pub const RECYCLE_BIN: &[RecycledDocument] = &[
    RecycledDocument {
        id: "bin/first-homepage.txt",
        name: "first-homepage.txt",
        deleted_on: "3 Jan",
        body: "Welcome to my homepage.\n\nUnder construction since 2011.",
    },
    RecycledDocument {
        id: "bin/five-year-plan.txt",
        name: "five-year-plan.txt",
        deleted_on: "12 Feb",
        body: "1. Build the thing.\n2. Find out what the thing is actually for.\n3. Build that instead.",
    },
    RecycledDocument {
        id: "bin/todo-old.txt",
        name: "todo-old.txt",
        deleted_on: "28 Nov",
        body: "- reply to emails\n- stop adding features\n- add one more feature",
    },
];

pub fn recycled_document(id: &DocumentId) -> Option<&'static RecycledDocument> {
    RECYCLE_BIN.iter().find(|document| document.id == id.as_str())
}
