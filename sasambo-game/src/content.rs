//! Embedded game content: track keys, badges, the item catalog, and the
//! question pools for every mini-game.
//!
//! All content ships inside the crate so the engine works offline; hosts
//! only persist the profile snapshot. Pools are ordered easy to hard,
//! which is what the level-set sampler in [`crate::levelgen`] relies on.
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{PRONUNCIATION_PASS_SIMILARITY, PRONUNCIATION_SCORE_CEIL, PRONUNCIATION_SCORE_FLOOR};
use crate::items::{InventoryItem, ItemKind, ItemRarity};
use crate::profile::{Badge, Language};

/// The playable game tracks. Story and the three quiz games are
/// per-language; the party games share one track across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Story,
    PasarKata,
    TebakBahasa,
    Legenda,
    MisteriSasambo,
    PantunHype,
    TakdirBebas,
}

impl GameKind {
    pub const ALL: [Self; 7] = [
        Self::Story,
        Self::PasarKata,
        Self::TebakBahasa,
        Self::Legenda,
        Self::MisteriSasambo,
        Self::PantunHype,
        Self::TakdirBebas,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::PasarKata => "pasarKata",
            Self::TebakBahasa => "tebakBahasa",
            Self::Legenda => "legenda",
            Self::MisteriSasambo => "misteriSasambo",
            Self::PantunHype => "pantunHype",
            Self::TakdirBebas => "takdirBebas",
        }
    }

    /// Whether this track keeps separate progress per language.
    #[must_use]
    pub const fn per_language(self) -> bool {
        matches!(self, Self::PasarKata | Self::TebakBahasa | Self::Legenda)
    }

    /// The `game_progress` key for this track, e.g. `pasarKata_Sasak` or
    /// plain `story`.
    #[must_use]
    pub fn progress_key(self, language: Language) -> String {
        if self.per_language() {
            format!("{}_{}", self.as_str(), language.as_str())
        } else {
            self.as_str().to_string()
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress keys a fresh profile starts with, each at level 1. Tracks
/// absent here (free play) are inserted on first unlock.
#[must_use]
pub fn initial_game_progress() -> BTreeMap<String, u32> {
    let mut progress = BTreeMap::new();
    progress.insert(GameKind::Story.as_str().to_string(), 1);
    for language in Language::ALL {
        for kind in [GameKind::PasarKata, GameKind::TebakBahasa, GameKind::Legenda] {
            progress.insert(kind.progress_key(language), 1);
        }
    }
    progress.insert(GameKind::MisteriSasambo.as_str().to_string(), 1);
    progress.insert(GameKind::PantunHype.as_str().to_string(), 1);
    progress
}

/// The badge set every profile carries from creation, all unearned.
#[must_use]
pub fn default_badges() -> Vec<Badge> {
    let badge = |id: &str, name: &str, icon: &str, description: &str| Badge {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        earned: false,
    };
    vec![
        badge(
            "1",
            "Ahli Basa Alus",
            "🙏",
            "Menyelesaikan Level Sapaan dengan Nilai 100",
        ),
        badge("2", "Penutur Murni", "🗣️", "Akurasi suara rata-rata > 90%"),
        badge("3", "Juragan Tenun", "🧣", "Mengoleksi 5 motif kain digital"),
    ]
}

/// The 26-item master catalog, five per tier plus six Raden Dende.
#[must_use]
pub fn master_catalog_items() -> Vec<InventoryItem> {
    let item = |id: &str, name: &str, image: &str, kind: ItemKind, rarity: ItemRarity, description: &str| {
        InventoryItem {
            id: id.to_string(),
            name: name.to_string(),
            image: image.to_string(),
            kind,
            rarity,
            description: description.to_string(),
        }
    };
    use ItemKind::{Artifact, Clothing, Food, House, Instrument, Material};
    use ItemRarity::{Jajarkarang, KetuaKarang, LaluBaiq, Pemangku, RadenDende};
    vec![
        item("j-1", "Gasing Kayu", "🪵", Artifact, Jajarkarang, "Mainan rakyat jelata dari kayu nangka. Hiburan sederhana di pekarangan rumah."),
        item("j-2", "Gerabah Banyumulek", "⚱️", Material, Jajarkarang, "Periuk tanah liat buatan warga desa. Wadah air kehidupan sehari-hari."),
        item("j-3", "Biji Kopi Tambora", "☕", Food, Jajarkarang, "Hasil panen petani lereng gunung. Minuman penyemangat kerja."),
        item("j-4", "Topi Caping", "👒", Clothing, Jajarkarang, "Pelindung kepala petani jajarkarang saat menggarap sawah."),
        item("j-5", "Terasi Lombok", "🦐", Food, Jajarkarang, "Bumbu dapur wajib di setiap dapur warga Sasambo."),
        item("k-1", "Parang Klewang", "🗡️", Artifact, KetuaKarang, "Bilah besi simbol penjaga keamanan kampung."),
        item("k-2", "Ikat Kepala Polos", "🤕", Clothing, KetuaKarang, "Penanda seorang tetua lingkungan yang dihormati."),
        item("k-3", "Suling Bambu", "🎋", Instrument, KetuaKarang, "Alat musik penghibur warga saat ronda malam."),
        item("k-4", "Topeng Tugal", "🎭", Artifact, KetuaKarang, "Digunakan ketua karang saat memimpin hiburan rakyat."),
        item("k-5", "Madu Sumbawa", "🍯", Food, KetuaKarang, "Madu hutan pilihan, sering dijadikan buah tangan antar kampung."),
        item("p-1", "Naskah Lontar", "📜", Artifact, Pemangku, "Lembaran daun lontar berisi doa dan hukum adat. Dipegang oleh Kyai/Pemangku."),
        item("p-2", "Bokor Perak", "🥣", Artifact, Pemangku, "Wadah air suci untuk ritual adat yang dipimpin Pemangku."),
        item("p-3", "Sape", "🎸", Instrument, Pemangku, "Alat musik petik yang dimainkan dalam upacara penyembuhan."),
        item("p-4", "Minyak Sumbawa", "🏺", Material, Pemangku, "Ramuan rahasia tabib adat untuk pengobatan."),
        item("p-5", "Gong Gamelan", "🔘", Instrument, Pemangku, "Gong pembuka upacara sakral."),
        item("lb-1", "Keris Sasak Lurus", "⚔️", Artifact, LaluBaiq, "Pusaka keluarga bangsawan menengah. Tanda garis keturunan."),
        item("lb-2", "Tenun Ikat Sutra", "🧣", Clothing, LaluBaiq, "Kain halus yang hanya dipakai kaum Menak (Bangsawan)."),
        item("lb-3", "Susu Kuda Liar", "🥛", Food, LaluBaiq, "Minuman vitalitas kaum ksatria dan bangsawan."),
        item("lb-4", "Tembe Nggoli", "🏁", Clothing, LaluBaiq, "Sarung tenun Mbojo kualitas tinggi untuk acara resmi."),
        item("lb-5", "Kuda Pacu Bima", "🐎", Material, LaluBaiq, "Kuda tunggangan para Lalu saat berburu atau berlomba."),
        item("rd-1", "Keris Ganja Iras", "💫", Artifact, RadenDende, "Pusaka tertinggi para Raden. Pamornya memancarkan kewibawaan mutlak."),
        item("rd-2", "Mahkota Siger", "👑", Clothing, RadenDende, "Lambang keagungan Dende (Putri) kerajaan."),
        item("rd-3", "Kitab Negarakertagama", "📖", Artifact, RadenDende, "Salinan naskah kerajaan yang hanya boleh dibaca kerabat raja."),
        item("rd-4", "Jubah Sasambo Emas", "🧥", Clothing, RadenDende, "Busana kebesaran berlapis emas murni."),
        item("rd-5", "Bale Lumbung Emas", "🏠", House, RadenDende, "Simbol kekayaan dan kekuasaan tertinggi di tatanan sosial."),
        item("rd-6", "Cincin Mustika Merah", "💎", Clothing, RadenDende, "Permata warisan leluhur raja-raja terdahulu."),
    ]
}

/// One pronunciation target in the story mode: the regional word, its
/// Indonesian gloss, and the phoneme the level drills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCard {
    pub word: String,
    pub gloss: String,
    pub phoneme_focus: String,
}

type RawPhrase = (&'static str, &'static str, &'static str);

// Fifty words per language, ordered easy to hard: greetings and pronouns,
// then daily life, then cultural terms and proverbs.
const SASAK_STORY_POOL: [RawPhrase; 50] = [
    ("Tabe", "Permisi/Salam", "Sopan Santun"),
    ("Mbe", "Dimana", "Bunyi 'e' pepet"),
    ("Araq", "Ada", "Akhiran 'q' glottal"),
    ("Inaq", "Ibu", "Intonasi hormat"),
    ("Amaq", "Bapak", "Intonasi hormat"),
    ("Batur", "Teman", "Huruf 'r' jelas"),
    ("Solah", "Bagus", "Akhiran 'h' desah"),
    ("Piro", "Berapa", "Nada tanya"),
    ("Nasi", "Nasi", "Vokal jelas"),
    ("Aiq", "Air", "Akhiran 'q' tegas"),
    ("Gumi", "Bumi/Tanah", "Vokal bulat"),
    ("Jari", "Jadi", "Konsonan 'j'"),
    ("Side", "Anda", "Sapaan halus"),
    ("Tiang", "Saya (Halus)", "Sengau 'ng'"),
    ("Mele", "Mau", "E taling vs pepet"),
    ("Mangan", "Makan", "Sengau 'ng'"),
    ("Tindoq", "Tidur", "Akhiran 'q' mati"),
    ("Lampaq", "Jalan", "Tekanan akhir"),
    ("Berugak", "Gazebo", "Konsonan 'g' & 'k'"),
    ("Cidomo", "Kereta Kuda", "Irama kata"),
    ("Kandoq", "Lauk", "Glottal berat"),
    ("Pelecing", "Plecing", "Bunyi 'c'"),
    ("Begibung", "Makan Bersama", "Kebersamaan"),
    ("Midang", "Apel/Bertamu", "Sengau akhir"),
    ("Merariq", "Menikah", "Getaran 'r'"),
    ("Ngebeng", "Menggembala", "Sengau tengah"),
    ("Besiru", "Gotong Royong", "Semangat"),
    ("Sampi", "Sapi", "Bilabial 'm'"),
    ("Gawah", "Hutan", "Desah 'h'"),
    ("Segara", "Laut", "Vokal terbuka"),
    ("Montong", "Bukit", "Sengau ganda"),
    ("Ujan", "Hujan", "Awal vokal"),
    ("Panas", "Panas", "Sibilan 's'"),
    ("Jaje", "Kue", "Vokal 'e' taling"),
    ("Kelak", "Masak", "Akhiran 'k' mati"),
    ("Gendang Beleq", "Gendang Besar", "Tekanan frasa"),
    ("Bau Nyale", "Tangkap Nyale", "Diftong 'au'"),
    ("Peresean", "Tarung Rotan", "Intonasi semangat"),
    ("Sorong Serah", "Serah Terima Adat", "Aliterasi 's'"),
    ("Tindih Gumi", "Menjaga Tanah Air", "Keseriusan"),
    ("Sopo Angen", "Satu Hati", "Filosofi"),
    ("Ajining Diri", "Harga Diri", "Nada dalam"),
    ("Patuh Karya", "Bekerja Bersama", "Harmoni"),
    ("Aiq Meneng", "Air Tenang", "Ketenangan"),
    ("Tunjung Tilah", "Bunga Mengapung", "Puitis"),
    ("Mandalika", "Putri Mandalika", "Nama Legenda"),
    ("Dewi Anjani", "Penunggu Rinjani", "Nama Suci"),
    ("Bale Tani", "Rumah Petani", "Arsitektur"),
    ("Lumbung Padi", "Tempat Padi", "Kesejahteraan"),
    ("Sasak Tulen", "Sasak Asli", "Identitas"),
];

const SAMAWA_STORY_POOL: [RawPhrase; 50] = [
    ("Mana", "Apa", "Vokal 'a' pendek"),
    ("Tau", "Orang/Kabar", "Diftong 'au'"),
    ("Bala", "Rumah/Istana", "Lidah lembut"),
    ("Lawang", "Pintu", "Sengau 'ng'"),
    ("Lalo", "Pergi", "Vokal 'o' bulat"),
    ("Mangan", "Makan", "Sengau 'ng'"),
    ("Nyer", "Cepat", "Sengau 'ny'"),
    ("Turas", "Tidur", "Getar 'r'"),
    ("Ninda", "Indah", "Sengau 'n'"),
    ("Cota", "Asin", "Konsonan 'c'"),
    ("Ina", "Ibu", "Sapaan"),
    ("Bapak", "Bapak", "Akhiran 'k'"),
    ("Kaji", "Saya (Halus)", "Sopan"),
    ("Nene", "Kamu/Tuhan", "Konteks"),
    ("Mikir", "Berpikir", "Konsonan 'm'"),
    ("Barapan", "Balapan", "Semangat"),
    ("Basiru", "Gotong Royong", "Harmoni"),
    ("Nyorong", "Mengantar", "Sengau 'ny'"),
    ("Sandro", "Dukun/Tabib", "Konsonan 'dr'"),
    ("Rarit", "Dendeng", "Getar 'r' ganda"),
    ("Sepat", "Ikan Kuah Asam", "Akhiran 't'"),
    ("Singang", "Ikan Kuah Kuning", "Sengau 'ng' ganda"),
    ("Olat", "Gunung", "Akhiran 't'"),
    ("Lito", "Batu", "Vokal 'o'"),
    ("Ai Awak", "Keringat", "Diftong 'ai'"),
    ("Dalam Loka", "Istana Tua", "Nama Tempat"),
    ("Bala Kuning", "Istana Kuning", "Warna"),
    ("Jaran", "Kuda", "Konsonan 'j'"),
    ("Kebo", "Kerbau", "Vokal 'o'"),
    ("Menjangan", "Rusa", "Sengau 'nj'"),
    ("Poto", "Ujung", "Vokal 'o' pendek"),
    ("Labuhan", "Pelabuhan", "Desah 'h'"),
    ("Pasola", "Pesta Kuda", "Serapan"),
    ("Moyo", "Pulau Moyo", "Nama Pulau"),
    ("Tano", "Tanjung", "Vokal 'o'"),
    ("Sabalong Samalewa", "Membangun Bersama", "Slogan"),
    ("Pariri Lema Bariri", "Memperbaiki Jadi Baik", "Filosofi"),
    ("Saling Siki", "Saling Memperbaiki", "Nilai Moral"),
    ("Adat Barenti Ko Syara", "Adat Bersendi Syara", "Religius"),
    ("Takit Ko Nene", "Takut Tuhan", "Spiritual"),
    ("Lawas", "Puisi Lisan", "Sastra"),
    ("Sakeco", "Musik Tradisi", "Kesenian"),
    ("Nguri", "Upacara Adat", "Ritual"),
    ("Ponan", "Pesta Bukit", "Tradisi"),
    ("Munit", "Adat Kematian", "Sakral"),
    ("Kre Alang", "Kain Tenun", "Kriya"),
    ("Kemang Satange", "Bunga Setangkai", "Motif"),
    ("Lonto Engal", "Tumbuhan Menjalar", "Motif"),
    ("Samawa Rea", "Sumbawa Besar", "Kebanggaan"),
    ("Intan Bulaeng", "Emas Permata", "Kiasan"),
];

const MBOJO_STORY_POOL: [RawPhrase; 50] = [
    ("Mada", "Saya", "Konsonan 'd' lembut"),
    ("Ita", "Anda", "Sopan"),
    ("Au Habba", "Apa Kabar", "Desah 'h'"),
    ("Lembo Ade", "Sabar Hati/Salam", "Intonasi Halus"),
    ("Ngaha", "Makan", "Sengau 'ng'"),
    ("Nara", "Minum", "Getar 'r'"),
    ("La'o", "Pergi", "Glottal '''"),
    ("Mai Ta", "Mari Sini", "Ajakan"),
    ("Jara", "Kuda", "Konsonan 'j'"),
    ("Wadu", "Batu", "Vokal 'u'"),
    ("Haju", "Kayu", "Desah 'h'"),
    ("Uma", "Rumah", "Vokal 'u'"),
    ("Doro", "Gunung", "Getar 'r'"),
    ("Oi", "Air", "Diftong"),
    ("Moti", "Laut", "Akhiran 'i'"),
    ("Rimpu", "Sarung Kepala", "Identitas"),
    ("Sambolo", "Ikat Kepala", "Sengau 'mb'"),
    ("Uma Lengge", "Lumbung Padi", "Sengau 'ngg'"),
    ("Asi Mbojo", "Istana Bima", "Sejarah"),
    ("Pacoa Jara", "Pacuan Kuda", "Aktivitas"),
    ("Hanta Ua Pua", "Maulid Nabi", "Upacara"),
    ("Tembe Nggoli", "Sarung Tenun", "Sengau 'ngg'"),
    ("Uta Londe", "Ikan Bandeng", "Makanan"),
    ("Janga", "Ayam", "Sengau 'ng'"),
    ("Buja", "Tombak", "Konsonan 'b'"),
    ("Golo", "Parang", "Vokal 'o'"),
    ("Saremba", "Selendang", "Sengau 'mb'"),
    ("Saloko", "Mahkota", "Adat"),
    ("Kalembo Ade", "Maaf/Sabar", "Permintaan"),
    ("Kasama Weki", "Kebersamaan", "Sosial"),
    ("Taho", "Baik", "Sifat"),
    ("Meci", "Rusak", "Sifat"),
    ("Na'e", "Besar", "Glottal"),
    ("To'i", "Kecil", "Glottal"),
    ("Disi", "Dingin", "Sibilan"),
    ("Maja Labo Dahu", "Malu & Takut", "Filosofi Utama"),
    ("Nggahi Rawi Pahu", "Satunya Kata Perbuatan", "Integritas"),
    ("Dou Labo Dana", "Rakyat & Tanah Air", "Nasionalisme"),
    ("Taho Ro Ne'e", "Baik & Mau", "Ketulusan"),
    ("Karawi Kaboju", "Kerja Sungguh-sungguh", "Etos Kerja"),
    ("Mbojo Mantoi", "Bima Masa Lalu", "Sejarah"),
    ("Dana Traha", "Makam Raja", "Situs"),
    ("Sultan Abdul Kahir", "Sultan Pertama", "Tokoh"),
    ("Buja Kadanda", "Tari Perang", "Tarian"),
    ("Gantao", "Bela Diri", "Seni"),
    ("Mpama", "Cerita Rakyat", "Sastra"),
    ("Kalero", "Nyanyian Ratapan", "Vokal"),
    ("Biola Katongga", "Biola Bambu", "Musik"),
    ("Sangeang Api", "Gunung Berapi", "Geografi"),
    ("Wadu Ntanda Rahi", "Batu Melihat Suami", "Legenda"),
];

/// The pronunciation pool for one language track, ordered easy to hard.
#[must_use]
pub fn story_pool(language: Language) -> Vec<PhraseCard> {
    let raw: &[RawPhrase] = match language {
        Language::Sasak => &SASAK_STORY_POOL,
        Language::Samawa => &SAMAWA_STORY_POOL,
        Language::Mbojo => &MBOJO_STORY_POOL,
    };
    raw.iter()
        .map(|&(word, gloss, focus)| PhraseCard {
            word: word.to_string(),
            gloss: gloss.to_string(),
            phoneme_focus: focus.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Map backdrops, rotated level by level so the world stays varied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Biome {
    Village,
    Coast,
    Market,
    Forest,
    Mountain,
    Palace,
}

pub const BIOME_ROTATION: [Biome; 6] = [
    Biome::Village,
    Biome::Coast,
    Biome::Market,
    Biome::Forest,
    Biome::Mountain,
    Biome::Palace,
];

/// One node on the story-mode map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryLevel {
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub biome: Biome,
    pub phrase: PhraseCard,
}

/// The full 50-level story track for one language. Levels 1-15 are easy,
/// 16-35 medium, 36-50 hard; biomes rotate with period six.
#[must_use]
pub fn story_levels(language: Language) -> Vec<StoryLevel> {
    story_pool(language)
        .into_iter()
        .enumerate()
        .map(|(index, phrase)| {
            let id = u32::try_from(index + 1).unwrap_or(u32::MAX);
            let difficulty = if id > 35 {
                Difficulty::Hard
            } else if id > 15 {
                Difficulty::Medium
            } else {
                Difficulty::Easy
            };
            StoryLevel {
                id,
                title: format!("Level {id}"),
                difficulty,
                biome: BIOME_ROTATION[index % BIOME_ROTATION.len()],
                phrase,
            }
        })
        .collect()
}

/// A word-matching card for the market game: the regional phrase and its
/// Indonesian translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasarKataQuestion {
    pub id: String,
    pub target: String,
    pub translation: String,
}

fn pasar(id: &str, target: &str, translation: &str) -> PasarKataQuestion {
    PasarKataQuestion {
        id: id.to_string(),
        target: target.to_string(),
        translation: translation.to_string(),
    }
}

/// The matching pool for one language, ordered easy to hard. Sasak is the
/// deep track; Samawa and Mbojo are starter sets.
#[must_use]
pub fn pasar_kata_pool(language: Language) -> Vec<PasarKataQuestion> {
    match language {
        Language::Sasak => vec![
            pasar("s-1", "Mbe laiq", "Mau kemana"),
            pasar("s-2", "Araq te", "Ada teh"),
            pasar("s-3", "Ndek araq", "Tidak ada"),
            pasar("s-4", "Tabe wira", "Permisi pahlawan"),
            pasar("s-5", "Silaq mampir", "Silakan mampir"),
            pasar("s-6", "Mangan juluk", "Makan dulu"),
            pasar("s-7", "Inaq kaji", "Ibu saya (Halus)"),
            pasar("s-8", "Amaq te", "Bapak kita"),
            pasar("s-9", "Semeton jari", "Saudara sekalian"),
            pasar("s-10", "Piro aji niki", "Berapa harga ini"),
            pasar("s-11", "Mahal gati", "Mahal sekali"),
            pasar("s-12", "Kurang bedik", "Kurang sedikit"),
            pasar("s-13", "Beli telu", "Beli tiga"),
            pasar("s-14", "Bau nyale leq pantai", "Tangkap nyale di pantai"),
            pasar("s-15", "Lalo midang", "Pergi apel/berkunjung"),
            pasar("s-16", "Mangan kandoq pelecing", "Makan lauk plecing"),
            pasar("s-17", "Tidur leq berugak", "Tidur di gazebo"),
            pasar("s-18", "Ndek ku bani", "Tidak aku berani"),
            pasar("s-19", "Sai aran side", "Siapa nama kamu"),
            pasar("s-20", "Mbe taok bale", "Dimana letak rumah"),
            pasar("s-21", "Ndek narak kepeng", "Tidak ada uang"),
            pasar("s-22", "Sampun mangan", "Sudah makan"),
            pasar("s-23", "Kangen gati side", "Rindu sekali kamu"),
            pasar("s-24", "Solah angen dengan", "Hati orang yang baik"),
            pasar("s-25", "Susah angen kaji", "Sedih hati saya"),
            pasar("s-26", "Endaq girang serek", "Jangan suka marah"),
            pasar("s-27", "Begibung mangan bareng", "Begibung makan bersama"),
            pasar("s-28", "Nyongkolan iring penganten", "Nyongkolan iring pengantin"),
            pasar("s-29", "Gendang beleq suarane", "Gendang beleq suaranya"),
            pasar("s-30", "Peresean adu rotan", "Peresean adu rotan"),
            pasar("s-31", "Endaq girang ngebang gumi", "Jangan suka merusak bumi"),
            pasar("s-32", "Tindih gumi paer", "Menjaga tanah air"),
            pasar("s-33", "Ajining diri", "Harga diri"),
            pasar("s-34", "Solah solah gama", "Baik baiklah beragama"),
            pasar("s-35", "Jagaq lisan side", "Jaga lisan kamu"),
            pasar("s-36", "Sopo angen sopo gumi", "Satu hati satu bumi"),
            pasar("s-37", "Adat luir gama", "Adat bersendi agama"),
            pasar("s-38", "Gumi sasak mirah adi", "Bumi Sasak permata adik"),
            pasar("s-39", "Patuh patuh pade", "Sama sama rata"),
            pasar("s-40", "Tau tatas tuhu trasna", "Tahu, mampu, tulus, cinta"),
        ],
        Language::Samawa => vec![
            pasar("sm-1", "Mana tau", "Apa kabar"),
            pasar("sm-2", "Kaji lalo", "Saya pergi"),
            pasar("sm-3", "Mangan sepat", "Makan sepat"),
            pasar("sm-4", "Ina masak jangan", "Ibu masak sayur"),
            pasar("sm-5", "Bapak inum kopi", "Bapak minum kopi"),
            pasar("sm-6", "Nene uda mangan", "Kamu sudah makan"),
        ],
        Language::Mbojo => vec![
            pasar("m-1", "Au habba", "Apa kabar"),
            pasar("m-2", "Mada la'o", "Saya pergi"),
            pasar("m-3", "Ngaha u'a", "Makan sudah"),
        ],
    }
}

/// A multiple-choice vocabulary question. Options are stored unshuffled
/// with the correct answer separate; presentation order comes from
/// [`QuizQuestion::shuffled_options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub correct: String,
    pub distractors: Vec<String>,
}

impl QuizQuestion {
    /// All answer options in a fresh random order.
    pub fn shuffled_options<R: Rng>(&self, rng: &mut R) -> Vec<String> {
        let mut options: Vec<String> = std::iter::once(self.correct.clone())
            .chain(self.distractors.iter().cloned())
            .collect();
        options.shuffle(rng);
        options
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct == answer
    }
}

fn quiz(id: &str, prompt: &str, correct: &str, distractors: [&str; 3]) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        correct: correct.to_string(),
        distractors: distractors.iter().map(ToString::to_string).collect(),
    }
}

/// The guess-the-word pool for one language.
#[must_use]
pub fn tebak_bahasa_pool(language: Language) -> Vec<QuizQuestion> {
    match language {
        Language::Sasak => vec![
            quiz("1-1", "Apa arti 'Inaq'?", "Ibu", ["Bapak", "Kakak", "Adik"]),
            quiz("1-2", "Apa arti 'Amaq'?", "Bapak", ["Ibu", "Paman", "Kakek"]),
            quiz("1-3", "Apa arti 'Baloq'?", "Nenek/Kakek", ["Anak", "Cucu", "Buyut"]),
        ],
        Language::Samawa => vec![
            quiz("1-1", "Apa arti 'Bala'?", "Rumah", ["Jalan", "Kota", "Desa"]),
            quiz("1-2", "Apa arti 'Ina'?", "Ibu", ["Bapak", "Adik", "Kakak"]),
            quiz("1-3", "Apa arti 'Bapak'?", "Ayah", ["Paman", "Kakek", "Adik"]),
        ],
        Language::Mbojo => vec![
            quiz("1-1", "Apa arti 'Mada'?", "Saya", ["Kamu", "Dia", "Kita"]),
            quiz("1-2", "Apa arti 'Ita'?", "Anda (Sopan)", ["Saya", "Dia", "Mereka"]),
            quiz("1-3", "Apa arti 'Nahhu'?", "Aku (Kasar/Akrab)", ["Kamu", "Dia", "Kita"]),
        ],
    }
}

/// A folklore comprehension question: a short story excerpt followed by a
/// multiple-choice question about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendQuestion {
    pub id: String,
    pub story: String,
    pub question: QuizQuestion,
}

fn legend(id: &str, story: &str, prompt: &str, correct: &str, distractors: [&str; 3]) -> LegendQuestion {
    LegendQuestion {
        id: id.to_string(),
        story: story.to_string(),
        question: quiz(id, prompt, correct, distractors),
    }
}

/// The folklore pool for one language.
#[must_use]
pub fn legenda_pool(language: Language) -> Vec<LegendQuestion> {
    match language {
        Language::Sasak => vec![
            legend(
                "l-s-1",
                "Legenda Putri Mandalika menceritakan pengorbanan seorang putri yang berubah menjadi...",
                "Menjadi apa?",
                "Cacing Nyale",
                ["Ikan Duyung", "Batu Karang", "Burung Laut"],
            ),
            legend(
                "l-s-2",
                "Putri Mandalika memilih menceburkan diri ke laut agar...",
                "Apa alasannya?",
                "Tidak terjadi pertumpahan darah",
                ["Bisa berenang bebas", "Menemui Raja Laut", "Menghindari pernikahan"],
            ),
        ],
        Language::Samawa => vec![legend(
            "l-sm-1",
            "Tanjung Menangis konon berasal dari tangisan...",
            "Siapa yang menangis?",
            "Putri Lala Bulaeng",
            ["Putri Mandalika", "Dewi Anjani", "Ratu Sumbawa"],
        )],
        Language::Mbojo => vec![legend(
            "l-m-1",
            "La Hila berubah menjadi batu di...",
            "Dimana?",
            "Wadu Ntanda Rahi",
            ["Gunung Tambora", "Pulau Sangeang", "Pantai Lawata"],
        )],
    }
}

/// Cultural origin of a party-game question. Unlike [`Language`] this
/// includes the pan-regional `Sasambo` mix used by capstone levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Culture {
    Sasak,
    Samawa,
    Mbojo,
    Sasambo,
}

impl Culture {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sasak => "Sasak",
            Self::Samawa => "Samawa",
            Self::Mbojo => "Mbojo",
            Self::Sasambo => "Sasambo",
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guess-the-subject riddle for Misteri Sasambo: clues are revealed one
/// at a time and the player picks the subject from four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MysteryQuestion {
    pub id: String,
    pub culture: Culture,
    pub clues: Vec<String>,
    pub answer: String,
    pub decoys: Vec<String>,
}

impl MysteryQuestion {
    /// All answer options in a fresh random order.
    pub fn shuffled_options<R: Rng>(&self, rng: &mut R) -> Vec<String> {
        let mut options: Vec<String> = std::iter::once(self.answer.clone())
            .chain(self.decoys.iter().cloned())
            .collect();
        options.shuffle(rng);
        options
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.answer == answer
    }
}

fn mystery(
    id: &str,
    culture: Culture,
    answer: &str,
    clues: [&str; 3],
    decoys: [&str; 3],
) -> MysteryQuestion {
    MysteryQuestion {
        id: id.to_string(),
        culture,
        clues: clues.iter().map(ToString::to_string).collect(),
        answer: answer.to_string(),
        decoys: decoys.iter().map(ToString::to_string).collect(),
    }
}

/// The Misteri Sasambo riddle track, one riddle per level, easy to expert.
#[must_use]
pub fn misteri_sasambo_pool() -> Vec<MysteryQuestion> {
    vec![
        mystery(
            "ms-1",
            Culture::Sasak,
            "Ayam Taliwang",
            ["Makanan pedas.", "Ayam kampung bakar.", "Bumbu pelalah."],
            ["Sate Bulayak", "Ayam Betutu", "Bebek Bengil"],
        ),
        mystery(
            "ms-2",
            Culture::Mbojo,
            "Susu Kuda Liar",
            ["Minuman putih.", "Dari hewan pacuan.", "Fermentasi alami."],
            ["Tuak Manis", "Susu Sapi", "Yoghurt"],
        ),
        mystery(
            "ms-3",
            Culture::Mbojo,
            "Rimpu",
            ["Menggunakan sarung.", "Menutup kepala wanita.", "Seperti hijab tradisional."],
            ["Jilbab", "Kebaya", "Songket"],
        ),
        mystery(
            "ms-4",
            Culture::Sasak,
            "Gendang Beleq",
            ["Alat musik pukul.", "Ukurannya sangat besar.", "Dimainkan berkelompok."],
            ["Serunai", "Gamelan", "Rebana"],
        ),
        mystery(
            "ms-5",
            Culture::Samawa,
            "Dalam Loka",
            ["Bangunan kayu raksasa.", "Bekas istana sultan.", "Bertopang 99 tiang."],
            ["Bala Kuning", "Uma Lengge", "Bale Tani"],
        ),
        mystery(
            "ms-6",
            Culture::Mbojo,
            "Uma Lengge",
            ["Bentuknya mengerucut.", "Atap alang-alang.", "Tempat simpan padi."],
            ["Lumbung", "Berugak", "Pendopo"],
        ),
        mystery(
            "ms-7",
            Culture::Sasak,
            "Peresean",
            ["Adu ketangkasan.", "Memakai rotan dan perisai.", "Meminta hujan."],
            ["Gulat", "Karapan Sapi", "Pencak Silat"],
        ),
        mystery(
            "ms-8",
            Culture::Samawa,
            "Main Jaran",
            ["Joki cilik.", "Kecepatan tinggi.", "Hewan Poni Sumbawa."],
            ["Barapan Kebo", "Adu Domba", "Karapan Sapi"],
        ),
        mystery(
            "ms-9",
            Culture::Samawa,
            "Kre Alang",
            ["Benang emas/perak.", "Motif tumbuhan/hewan.", "Kain khas Sumbawa."],
            ["Songket Sasak", "Tembe Nggoli", "Batik"],
        ),
        mystery(
            "ms-10",
            Culture::Mbojo,
            "Maja Labo Dahu",
            ["Malu berbuat salah.", "Takut kepada Tuhan.", "Pedoman hidup Bima."],
            ["Sopo Angen", "Sabalong Samalewa", "Bhinneka Tunggal Ika"],
        ),
    ]
}

/// The closing couplet of a pantun (lines three and four).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantunCouplet {
    pub line3: String,
    pub line4: String,
}

/// A pantun-completion challenge for Pantun Hype: the opening couplet
/// (sampiran) is given and the player picks the closing couplet that
/// carries the rhyme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantunQuestion {
    pub id: String,
    pub culture: Culture,
    pub sampiran: [String; 2],
    /// Rhyme hint shown with the sampiran.
    pub hint: String,
    pub correct: PantunCouplet,
    pub decoy: PantunCouplet,
}

impl PantunQuestion {
    /// The two candidate couplets in a fresh random order.
    pub fn shuffled_options<R: Rng>(&self, rng: &mut R) -> Vec<PantunCouplet> {
        let mut options = vec![self.correct.clone(), self.decoy.clone()];
        options.shuffle(rng);
        options
    }

    #[must_use]
    pub fn is_correct(&self, couplet: &PantunCouplet) -> bool {
        &self.correct == couplet
    }
}

fn pantun(
    id: &str,
    culture: Culture,
    sampiran: [&str; 2],
    hint: &str,
    correct: (&str, &str),
    decoy: (&str, &str),
) -> PantunQuestion {
    let couplet = |(line3, line4): (&str, &str)| PantunCouplet {
        line3: line3.to_string(),
        line4: line4.to_string(),
    };
    PantunQuestion {
        id: id.to_string(),
        culture,
        sampiran: sampiran.map(ToString::to_string),
        hint: hint.to_string(),
        correct: couplet(correct),
        decoy: couplet(decoy),
    }
}

/// The Pantun Hype track, one pantun per level, rotating through the
/// cultures and ending on the pan-regional capstone.
#[must_use]
pub fn pantun_hype_pool() -> Vec<PantunQuestion> {
    vec![
        pantun(
            "ph-1",
            Culture::Sasak,
            ["Jok segara bau empaq", "Beli terasi leq mataram"],
            "Cari rima A-B-A-B (Akhiran -ak/-am)",
            ("Lamun side ngaku sasak", "Endaq girang ngebang gumi"),
            ("Lalo mandi jok kali", "Beli nasi leq warung"),
        ),
        pantun(
            "ph-2",
            Culture::Samawa,
            ["Ke pasar beli gulas", "Beli juga buah manggis"],
            "Rima Ikhlas - Manis",
            ("Lamun nene sate ikhlas", "Dapat pahala manis"),
            ("Lalo turing ka moyo", "Dapat ikan besar"),
        ),
        pantun(
            "ph-3",
            Culture::Mbojo,
            ["La'o la'o di pasar Bima", "Beli uhi rura kahawa"],
            "Rima Pahu - Dahu",
            ("Nggahi rawi pahu", "Maja labo dahu"),
            ("Nara kahawa di uma", "Beli uhi rura"),
        ),
        pantun(
            "ph-4",
            Culture::Sasak,
            ["Mun belayar leq segara", "Bau kandoq araq lime"],
            "Rima A-A-A-A (Vokal e/a)",
            ("Mun belajar leq dunya", "Jari sangune leq akhirat"),
            ("Mun tindoq leq bale", "Ndek arak gune"),
        ),
        pantun(
            "ph-5",
            Culture::Samawa,
            ["Beli jarum di toko", "Jarum patah beli baru"],
            "Rima Toko - Baru",
            ("Lamar dadi siong", "Ku sate kau"),
            ("Beli baju baru", "Warna biru"),
        ),
        pantun(
            "ph-6",
            Culture::Mbojo,
            ["Ntara wura di langi", "Sinar mpori di dana"],
            "Rima i - a",
            ("Taho ra ne'e weki", "Kasama weki dana"),
            ("La'o la'o di pasar", "Beli sayur"),
        ),
        pantun(
            "ph-7",
            Culture::Sasak,
            ["Bau paku leq sedin kokok", "Masak kandoq leq sedin rurung"],
            "Rima o - u",
            ("Inaq amaq ndek te laloq", "Saling tulung jari roah"),
            ("Mangan nasi leq mataram", "Enak rasanya"),
        ),
        pantun(
            "ph-8",
            Culture::Samawa,
            ["Main jaran di kerato", "Menang lomba dapat piala"],
            "Rima o - a",
            ("Tu samawa rea", "Sabalong samalewa"),
            ("Lalo mandi di sungai", "Airnya dingin sekali"),
        ),
        pantun(
            "ph-9",
            Culture::Mbojo,
            ["Wadu ntanda rahi", "Di pinggir laut"],
            "Rima i - ut",
            ("Dou labo dana", "Mesti bersatu"),
            ("Lihat batu besar", "Di atas gunung"),
        ),
        pantun(
            "ph-10",
            Culture::Sasambo,
            ["Rinjani Tambora menjulang tinggi", "Sumbawa pulau harapan"],
            "Rima i - an",
            ("Sasak Samawa Mbojo berseri", "NTB Gemilang masa depan"),
            ("Jalan jalan ke pantai", "Makan ikan bakar"),
        ),
    ]
}

/// One selectable answer in an etiquette scenario, with the feedback line
/// the client shows after the choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioChoice {
    pub text: String,
    pub is_correct: bool,
    pub feedback: String,
}

/// A cultural-etiquette scenario for Takdir Bebas: a situation, a
/// question, and two choices with feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioQuestion {
    pub id: String,
    pub title: String,
    pub culture: Culture,
    pub context: String,
    pub prompt: String,
    pub choices: Vec<ScenarioChoice>,
}

impl ScenarioQuestion {
    /// The choice marked correct. Every shipped scenario has exactly one.
    #[must_use]
    pub fn correct_choice(&self) -> Option<&ScenarioChoice> {
        self.choices.iter().find(|choice| choice.is_correct)
    }
}

fn scenario(
    id: &str,
    title: &str,
    culture: Culture,
    context: &str,
    prompt: &str,
    correct: (&str, &str),
    wrong: (&str, &str),
) -> ScenarioQuestion {
    let choice = |(text, feedback): (&str, &str), is_correct: bool| ScenarioChoice {
        text: text.to_string(),
        is_correct,
        feedback: feedback.to_string(),
    };
    ScenarioQuestion {
        id: id.to_string(),
        title: title.to_string(),
        culture,
        context: context.to_string(),
        prompt: prompt.to_string(),
        choices: vec![choice(correct, true), choice(wrong, false)],
    }
}

/// The Takdir Bebas etiquette track, one scenario per level.
#[must_use]
pub fn takdir_bebas_pool() -> Vec<ScenarioQuestion> {
    vec![
        scenario(
            "td-1",
            "Bertamu di Sade",
            Culture::Sasak,
            "Pintu rumah adat Sasak sangat rendah.",
            "Apa yang kamu lakukan?",
            ("Menunduk hormat", "Benar! Menunduk tanda menghormati tuan rumah."),
            ("Masuk tegak", "Dug! Kepalamu terbentur. Tidak sopan."),
        ),
        scenario(
            "td-2",
            "Makan Sepat",
            Culture::Samawa,
            "Disuguhi ikan kuah asam (Sepat).",
            "Cara makan yang sopan?",
            ("Pakai tangan (Muluk)", "Tepat. Tradisi 'Muluk' mempererat rasa."),
            ("Minta sendok", "Kurang luwes, tuan rumah mungkin bingung."),
        ),
        scenario(
            "td-3",
            "Salam Bima",
            Culture::Mbojo,
            "Bertemu tetua adat Bima di jalan.",
            "Salam yang pas?",
            ("Lembo Ade", "Salam halus khas Bima."),
            ("Halo Bos", "Sangat tidak sopan."),
        ),
        scenario(
            "td-4",
            "Merariq",
            Culture::Sasak,
            "Temanmu ingin menikahi gadis Sasak sesuai adat.",
            "Apa langkah pertamanya?",
            (
                "Menculik (Melarikan) gadis",
                "Benar, 'Merariq' diawali dengan melarikan gadis atas persetujuan bersama.",
            ),
            ("Melamar resmi ke rumah", "Itu adat umum, bukan adat Sasak tradisional."),
        ),
        scenario(
            "td-5",
            "Barapan Kebo",
            Culture::Samawa,
            "Kerbau sedang berlari kencang di sawah.",
            "Dimana kamu berdiri?",
            ("Di pinggir pematang aman", "Aman dan tidak mengganggu Sandro (dukun)."),
            ("Di tengah lintasan", "Bahaya! Kamu bisa tertabrak."),
        ),
        scenario(
            "td-6",
            "Rimpu",
            Culture::Mbojo,
            "Seorang wanita memakai sarung menutup wajah (Rimpu Mpida).",
            "Apa statusnya?",
            ("Belum Menikah", "Benar, hanya mata yang terlihat."),
            ("Sudah Menikah", "Salah, kalau sudah menikah wajah terlihat (Rimpu Colo)."),
        ),
        scenario(
            "td-7",
            "Peresean",
            Culture::Sasak,
            "Lawanmu di arena Peresean terluka.",
            "Sikapmu?",
            ("Memeluk/Salaman setelah laga", "Sportivitas adalah inti Peresean."),
            ("Mengejek lawan", "Tidak ksatria. Anda diusir dari arena."),
        ),
        scenario(
            "td-8",
            "Nyorong",
            Culture::Samawa,
            "Membawa hantaran pernikahan.",
            "Siapa yang harus membawa?",
            ("Rombongan keluarga pria", "Ramai-ramai membawa barang."),
            ("Dikirim lewat kurir", "Tidak menghargai adat."),
        ),
        scenario(
            "td-9",
            "Hanta Ua Pua",
            Culture::Mbojo,
            "Upacara peringatan Maulid Nabi.",
            "Apa yang diarak?",
            ("Rumah mahligai berisi bunga", "Benar, berisi sirih pinang dan bunga telur."),
            ("Patung hewan", "Salah."),
        ),
        scenario(
            "td-10",
            "Bicara dengan Datu",
            Culture::Sasambo,
            "Raja bertanya namamu.",
            "Jawaban paling halus?",
            ("Tiang / Kaji / Mada", "Kata ganti 'Saya' yang paling halus."),
            ("Aku / Saya", "Terlalu kasar untuk Raja."),
        ),
    ]
}

/// Score a pronunciation attempt: similarity above the pass threshold is a
/// perfect 100, anything else lands in the consolation band.
pub fn pronunciation_score<R: Rng>(similarity: f64, rng: &mut R) -> u32 {
    if similarity > PRONUNCIATION_PASS_SIMILARITY {
        100
    } else {
        rng.gen_range(PRONUNCIATION_SCORE_FLOOR..=PRONUNCIATION_SCORE_CEIL)
    }
}
