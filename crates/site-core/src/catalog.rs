/// One card in the services slideshow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub guarantee: &'static str,
    pub duration: &'static str,
    pub category: &'static str,
    pub popular: bool,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Scherm Reparatie",
        description: "Gebroken scherm? Wij vervangen het snel en professioneel met originele onderdelen.",
        price: "Vanaf €50",
        guarantee: "6 maanden garantie",
        duration: "30 min - 1,5 uur",
        category: "Hardware",
        popular: true,
        image: "https://images.pexels.com/photos/404280/pexels-photo-404280.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Service {
        id: 2,
        title: "Batterij Vervanging",
        description: "Merk je dat je batterij steeds sneller leegloopt? In een half uurtje zit er bij ons weer een nieuwe batterij in.",
        price: "Vanaf €50",
        guarantee: "3 maanden garantie",
        duration: "30 min",
        category: "Hardware",
        popular: false,
        image: "/image.png",
    },
    Service {
        id: 3,
        title: "Waterschade Reparatie",
        description: "Telefoon in het water gevallen? Geen paniek, met onze ervaring in waterschadeherstel krijgen we veel toestellen weer werkend.",
        price: "Vanaf €30",
        guarantee: "Geen garantie",
        duration: "2-3 dagen",
        category: "Noodreparatie",
        popular: false,
        image: "https://images.pexels.com/photos/1476321/pexels-photo-1476321.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Service {
        id: 4,
        title: "Algemene Reparaties",
        description: "Camera, speakers, knoppen en meer reparaties door ervaren technici.",
        price: "Op aanvraag",
        guarantee: "6 maanden garantie",
        duration: "1-3 uur",
        category: "Hardware",
        popular: false,
        image: "https://images.pexels.com/photos/4792728/pexels-photo-4792728.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Service {
        id: 5,
        title: "Moederbord Reparatie",
        description: "Complexe moederbord problemen professioneel opgelost met micro-solderen.",
        price: "Vanaf €85",
        guarantee: "1 maand garantie",
        duration: "3-5 dagen",
        category: "Specialist",
        popular: false,
        image: "https://images.pexels.com/photos/2582937/pexels-photo-2582937.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Service {
        id: 6,
        title: "Software Herstel",
        description: "Systeem crashes, bootloops en software problemen vakkundig opgelost.",
        price: "Vanaf €40",
        guarantee: "1 maand garantie",
        duration: "1-2 uur",
        category: "Software",
        popular: false,
        image: "https://images.pexels.com/photos/546819/pexels-photo-546819.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Service {
        id: 7,
        title: "Premium Service",
        description: "Prioriteit behandeling met express service en pickup/delivery service.",
        price: "Vanaf €25 extra",
        guarantee: "Standaard garantie",
        duration: "Express",
        category: "Service",
        popular: true,
        image: "https://images.pexels.com/photos/1181244/pexels-photo-1181244.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Service {
        id: 8,
        title: "Preventief Onderhoud",
        description: "Complete check-up, reiniging en optimalisatie van uw apparaat.",
        price: "Vanaf €35",
        guarantee: "3 maanden garantie",
        duration: "45 min",
        category: "Onderhoud",
        popular: false,
        image: "https://images.pexels.com/photos/1476321/pexels-photo-1476321.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
];
