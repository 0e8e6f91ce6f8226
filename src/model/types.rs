//! Domain records produced from TMDB responses

use serde::{Deserialize, Serialize};

/// Which TMDB catalogue a video belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoKind {
    Movie,
    Show,
}

impl VideoKind {
    /// Path segment used by the TMDB API
    pub fn tmdb_path(self) -> &'static str {
        match self {
            VideoKind::Movie => "movie",
            VideoKind::Show => "tv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoKind::Movie => "Movie",
            VideoKind::Show => "TV Show",
        }
    }
}

/// External identifiers of a video. Navigation needs `tmdb_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoIds {
    pub tmdb_id: Option<u32>,
    pub imdb_id: Option<String>,
}

impl VideoIds {
    pub fn tmdb(id: u32) -> Self {
        Self { tmdb_id: Some(id), imdb_id: None }
    }

    pub fn is_empty(&self) -> bool {
        self.tmdb_id.is_none() && self.imdb_id.is_none()
    }
}

/// A video as shown in list rows and carousels
#[derive(Clone, Debug, PartialEq)]
pub struct VideoThumbnail {
    pub ids: VideoIds,
    pub kind: VideoKind,
    pub title: String,
    pub poster_url: Option<String>,
    pub year: Option<i32>,
}

impl VideoThumbnail {
    /// Identity used to deduplicate items across pages
    pub fn identity(&self) -> Option<(VideoKind, u32)> {
        self.ids.tmdb_id.map(|id| (self.kind, id))
    }
}

/// Full metadata of one movie or show
#[derive(Clone, Debug, PartialEq)]
pub struct VideoDetail {
    pub ids: VideoIds,
    pub kind: VideoKind,
    pub title: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub cover_url: Option<String>,
    /// Minutes
    pub runtime: Option<u32>,
    pub release_date: String,
    /// 0.0..=1.0, TMDB's 0-10 score divided by ten
    pub vote_average: f32,
    /// 0xAARRGGBB colour of the vote indicator
    pub vote_color: u32,
    pub genres: Vec<String>,
    /// `None` when the watch state is unknown or does not apply
    pub is_watched: Option<bool>,
}

pub const VOTE_COLOR_HIGH: u32 = 0xFF21_D07A;
pub const VOTE_COLOR_MEDIUM: u32 = 0xFFD2_D531;
pub const VOTE_COLOR_LOW: u32 = 0xFFDB_2360;
pub const VOTE_COLOR_NONE: u32 = 0xFF66_6666;

impl VideoDetail {
    pub fn vote_color_for(vote_average: f32) -> u32 {
        if vote_average <= 0.0 {
            VOTE_COLOR_NONE
        } else if vote_average >= 0.7 {
            VOTE_COLOR_HIGH
        } else if vote_average >= 0.4 {
            VOTE_COLOR_MEDIUM
        } else {
            VOTE_COLOR_LOW
        }
    }

    /// 0-10 score with one decimal, e.g. "8.4"
    pub fn score_label(&self) -> String {
        format!("{:.1}", self.vote_average * 10.0)
    }

    pub fn runtime_label(&self) -> String {
        match self.runtime {
            Some(minutes) if minutes >= 60 => format!("{}h {:02}m", minutes / 60, minutes % 60),
            Some(minutes) if minutes > 0 => format!("{}m", minutes),
            _ => "-".to_string(),
        }
    }

    pub fn thumbnail(&self) -> VideoThumbnail {
        VideoThumbnail {
            ids: self.ids.clone(),
            kind: self.kind,
            title: self.title.clone(),
            poster_url: self.poster_url.clone(),
            year: self.release_date.get(..4).and_then(|y| y.parse().ok()),
        }
    }
}

/// One cast member
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreditItem {
    pub name: String,
    pub character: Option<String>,
    pub profile_url: Option<String>,
}

/// One page of an upstream list
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub page: u32,
    pub total_pages: u32,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.results.is_empty() || self.page >= self.total_pages
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovieListType {
    Popular,
    NowPlaying,
    TopRated,
    Upcoming,
}

impl MovieListType {
    pub const ALL: [MovieListType; 4] = [
        MovieListType::Popular,
        MovieListType::NowPlaying,
        MovieListType::TopRated,
        MovieListType::Upcoming,
    ];

    pub fn tmdb_path(self) -> &'static str {
        match self {
            MovieListType::Popular => "movie/popular",
            MovieListType::NowPlaying => "movie/now_playing",
            MovieListType::TopRated => "movie/top_rated",
            MovieListType::Upcoming => "movie/upcoming",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MovieListType::Popular => "Popular Movies",
            MovieListType::NowPlaying => "Now Playing",
            MovieListType::TopRated => "Top Rated Movies",
            MovieListType::Upcoming => "Upcoming Movies",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShowListType {
    Trending,
    Popular,
    TopRated,
    OnTheAir,
}

impl ShowListType {
    pub const ALL: [ShowListType; 4] = [
        ShowListType::Trending,
        ShowListType::Popular,
        ShowListType::TopRated,
        ShowListType::OnTheAir,
    ];

    pub fn tmdb_path(self) -> &'static str {
        match self {
            ShowListType::Trending => "trending/tv/week",
            ShowListType::Popular => "tv/popular",
            ShowListType::TopRated => "tv/top_rated",
            ShowListType::OnTheAir => "tv/on_the_air",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ShowListType::Trending => "Trending Shows",
            ShowListType::Popular => "Popular Shows",
            ShowListType::TopRated => "Top Rated Shows",
            ShowListType::OnTheAir => "On The Air",
        }
    }
}

/// List selector covering both catalogues
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListType {
    Movies(MovieListType),
    Shows(ShowListType),
}

impl ListType {
    pub fn all() -> Vec<ListType> {
        MovieListType::ALL
            .into_iter()
            .map(ListType::Movies)
            .chain(ShowListType::ALL.into_iter().map(ListType::Shows))
            .collect()
    }

    pub fn title(self) -> &'static str {
        match self {
            ListType::Movies(list) => list.title(),
            ListType::Shows(list) => list.title(),
        }
    }

    pub fn kind(self) -> VideoKind {
        match self {
            ListType::Movies(_) => VideoKind::Movie,
            ListType::Shows(_) => VideoKind::Show,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(vote_average: f32, runtime: Option<u32>) -> VideoDetail {
        VideoDetail {
            ids: VideoIds::tmdb(550),
            kind: VideoKind::Movie,
            title: "Fight Club".to_string(),
            description: String::new(),
            poster_url: None,
            cover_url: None,
            runtime,
            release_date: "1999-10-15".to_string(),
            vote_average,
            vote_color: VideoDetail::vote_color_for(vote_average),
            genres: vec![],
            is_watched: None,
        }
    }

    #[test]
    fn test_score_is_displayed_out_of_ten() {
        assert_eq!(detail(0.843, None).score_label(), "8.4");
        assert_eq!(detail(0.0, None).score_label(), "0.0");
    }

    #[test]
    fn test_vote_color_thresholds() {
        assert_eq!(VideoDetail::vote_color_for(0.84), VOTE_COLOR_HIGH);
        assert_eq!(VideoDetail::vote_color_for(0.55), VOTE_COLOR_MEDIUM);
        assert_eq!(VideoDetail::vote_color_for(0.2), VOTE_COLOR_LOW);
        assert_eq!(VideoDetail::vote_color_for(0.0), VOTE_COLOR_NONE);
    }

    #[test]
    fn test_runtime_label() {
        assert_eq!(detail(0.8, Some(139)).runtime_label(), "2h 19m");
        assert_eq!(detail(0.8, Some(45)).runtime_label(), "45m");
        assert_eq!(detail(0.8, None).runtime_label(), "-");
    }

    #[test]
    fn test_thumbnail_year_comes_from_release_date() {
        assert_eq!(detail(0.8, None).thumbnail().year, Some(1999));
    }

    #[test]
    fn test_page_end_detection() {
        let page = Page { page: 3, total_pages: 3, results: vec![1] };
        assert!(page.is_last());
        let empty: Page<u8> = Page { page: 1, total_pages: 10, results: vec![] };
        assert!(empty.is_last());
        let middle = Page { page: 1, total_pages: 10, results: vec![1] };
        assert!(!middle.is_last());
    }
}
