use super::{GalleryImage, PageBanner};

pub const GALLERY_BANNER: PageBanner = PageBanner {
    title: "Visual Journey",
    subtitle: "Moments of discovery, joy, and achievement at SGN International.",
    class: "bg-navy text-white",
};

pub const GALLERY: [GalleryImage; 9] = [
    GalleryImage {
        src: "https://images.unsplash.com/photo-1509062522246-3755977927d7?auto=format&fit=crop&q=80&w=800",
        title: "Smart Classroom",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1523050335392-93851179ae22?auto=format&fit=crop&q=80&w=800",
        title: "Modern Library",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1577896851231-70ef18881754?auto=format&fit=crop&q=80&w=800",
        title: "Science Experiment",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1546410531-bb4caa6b424d?auto=format&fit=crop&q=80&w=800",
        title: "Sports Day",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?auto=format&fit=crop&q=80&w=800",
        title: "Computer Lab",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1427504494785-3a9ca7044f45?auto=format&fit=crop&q=80&w=800",
        title: "Campus Architecture",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1588072432836-e10032774350?auto=format&fit=crop&q=80&w=800",
        title: "Art & Craft",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1511632765486-a01980e01a18?auto=format&fit=crop&q=80&w=800",
        title: "Group Discussion",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?auto=format&fit=crop&q=80&w=800",
        title: "Learning Fun",
    },
];
