pub mod core;
pub mod snapshot;
pub mod index;
pub mod writer;
pub mod generator;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                        RANKDEX STRUCT ARCHITECTURE                        │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────── FACADE ────────────────────────────────┐
│                                                                           │
│  ┌────────────────────────────────────────────────────────────────────┐  │
│  │                      struct LeaderboardEngine                       │  │
│  │  config: Config                      // bounds, cadence, buffer    │  │
│  │  users: Arc<HashMap<UserId, User>>   // stable username registry   │  │
│  │  search_index: Arc<SearchIndex>      // static n-gram index        │  │
│  │  cell: Arc<SnapshotCell>             // atomic publication point   │  │
│  │  intake: Sender<RatingUpdate>        // bounded, non-blocking offer│  │
│  │  metrics: Arc<WriterMetrics>         // applied/dropped/published  │  │
│  └────────────────────────────────────────────────────────────────────┘  │
│                                                                           │
│  get_leaderboard(limit)   rank(rating)   search(query)   stats()          │
│  submit_update(id, rating) -> bool                                        │
└───────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────── SNAPSHOT ────────────────────────────────┐
│                                                                           │
│  ┌──────────────────────────┐   ┌────────────────────────────────────┐   │
│  │ struct SnapshotBuilder   │   │ struct LeaderboardSnapshot         │   │
│  │ • user_ratings: HashMap  │──▶│ • user_ratings: HashMap            │   │
│  │ • usernames: HashMap     │   │ • rating_count: Vec<u32>           │   │
│  │ • build()                │   │ • prefix_higher: Vec<u32>          │   │
│  └──────────────────────────┘   │ • users_by_rating: Vec<Vec<..>>    │   │
│                                 │ • rank(r) = prefix_higher[r] + 1   │   │
│  ┌──────────────────────────┐   └────────────────────────────────────┘   │
│  │ struct SnapshotCell      │     immutable once built; replaced by      │
│  │ • ArcSwap<Snapshot>      │     atomic pointer swap, freed after the   │
│  └──────────────────────────┘     last reader departs                    │
└───────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── WRITE PIPELINE ─────────────────────────────┐
│                                                                           │
│  producers ──try_send──▶ bounded channel ──▶ struct SnapshotWriter        │
│                          (full = drop)      • working: HashMap<id,rating> │
│                                             • select { intake, ticker }   │
│                                             • drain burst -> rebuild now  │
│                                             • rebuild_and_publish()       │
└───────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────── SEARCH ────────────────────────────────┐
│                                                                           │
│  struct SearchIndex: gram -> sorted Vec<UserId>   (built once at init)    │
│  query -> lowercase -> grams -> AND-intersect posting lists (shortest     │
│  list first) -> literal containment re-check -> annotate rating + rank    │
│  from one snapshot; sub-gram queries fall back to a linear scan           │
└───────────────────────────────────────────────────────────────────────────┘
*/
